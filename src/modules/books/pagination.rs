//! Pagination cursor over the current match set.

use std::num::NonZeroUsize;

/// Tracks how many fixed-size pages of the match set have been revealed.
///
/// Items revealed so far is always `min(page_index * page_size, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_index: usize,
    page_size: NonZeroUsize,
}

impl PaginationCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_index: 1,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    /// Reveal one more page. Callers check `remaining` first.
    pub fn advance(&mut self) {
        self.page_index += 1;
    }

    /// Bounds of the most recently revealed page, unclamped.
    pub fn current_window(&self) -> (usize, usize) {
        let size = self.page_size.get();
        ((self.page_index - 1) * size, self.page_index * size)
    }

    /// The most recently revealed page of `items`.
    pub fn current_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.current_window();
        clamp(items, start, end)
    }

    /// Everything revealed so far.
    pub fn revealed<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        clamp(items, 0, self.page_index * self.page_size.get())
    }

    /// Items of a match set of length `len` not yet revealed.
    pub fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.page_index * self.page_size.get())
    }
}

fn clamp<T>(items: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cursor(size: usize) -> PaginationCursor {
        PaginationCursor::new(NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn first_window_is_one_page() {
        let cursor = cursor(10);
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.current_window(), (0, 10));
    }

    #[test]
    fn initial_reveal_of_twenty_five() {
        let items: Vec<usize> = (0..25).collect();
        let cursor = cursor(10);
        assert_eq!(cursor.current_slice(&items), &items[0..10]);
        assert_eq!(cursor.remaining(items.len()), 15);
    }

    #[test]
    fn advance_reveals_disjoint_windows() {
        let items: Vec<usize> = (0..25).collect();
        let mut cursor = cursor(10);
        let mut seen = cursor.current_slice(&items).to_vec();

        cursor.advance();
        assert_eq!(cursor.page_index(), 2);
        assert_eq!(cursor.current_window(), (10, 20));
        let page = cursor.current_slice(&items);
        assert!(page.iter().all(|i| !seen.contains(i)));
        seen.extend_from_slice(page);
        assert_eq!(cursor.remaining(items.len()), 5);

        cursor.advance();
        assert_eq!(cursor.page_index(), 3);
        assert_eq!(cursor.current_slice(&items), &items[20..25]);
        assert_eq!(cursor.remaining(items.len()), 0);
        assert_eq!(cursor.revealed(&items), &items[..]);
    }

    #[test]
    fn remaining_never_underflows() {
        let mut cursor = cursor(10);
        assert_eq!(cursor.remaining(3), 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.remaining(0), 0);
        assert_eq!(cursor.remaining(25), 0);
        assert_eq!(cursor.remaining(31), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut cursor = cursor(4);
        for _ in 0..5 {
            cursor.advance();
        }
        cursor.reset();
        assert_eq!(cursor.page_index(), 1);
        assert_eq!(cursor.current_window(), (0, 4));
    }

    #[test]
    fn slices_past_the_end_are_empty() {
        let items = [1, 2, 3];
        let mut cursor = cursor(10);
        cursor.advance();
        assert!(cursor.current_slice(&items).is_empty());
        assert_eq!(cursor.revealed(&items), &items[..]);
    }

    proptest! {
        #[test]
        fn prop_revealed_and_remaining_partition_the_matches(
            len in 0..200usize,
            size in 1..20usize,
            advances in 0..15usize
        ) {
            let items: Vec<usize> = (0..len).collect();
            let mut cursor = cursor(size);
            for _ in 0..advances {
                cursor.advance();
            }

            let revealed = cursor.revealed(&items);
            prop_assert_eq!(revealed.len(), (cursor.page_index() * size).min(len));
            prop_assert_eq!(revealed.len() + cursor.remaining(len), len);
            prop_assert!(cursor.current_slice(&items).len() <= size);
            prop_assert!(revealed.ends_with(cursor.current_slice(&items)));
        }
    }
}
