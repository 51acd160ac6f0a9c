//! Project-specific utilities live here.

use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};

/// Calendar year of a publication date.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else
/// yields `None`.
pub fn published_year(published: &str) -> Option<i32> {
    if let Ok(timestamp) = OffsetDateTime::parse(published, &Rfc3339) {
        return Some(timestamp.year());
    }
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(published, &format).ok().map(|date| date.year())
}
