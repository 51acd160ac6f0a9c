//! Open/closed state of the page's dialogs.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    Search,
    Settings,
    /// Book detail dialog
    Detail,
}

impl Overlay {
    pub const ALL: [Overlay; 3] = [Overlay::Search, Overlay::Settings, Overlay::Detail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::Search => "search",
            Overlay::Settings => "settings",
            Overlay::Detail => "detail",
        }
    }

    /// Field that receives focus when the overlay opens.
    pub fn focus_target(&self) -> Option<&'static str> {
        match self {
            Overlay::Search => Some("search-title"),
            Overlay::Settings | Overlay::Detail => None,
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("unknown overlay '{0}'; expected search/settings/detail")]
    Unknown(String),
}

impl FromStr for Overlay {
    type Err = OverlayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Overlay::ALL
            .into_iter()
            .find(|overlay| overlay.as_str() == value)
            .ok_or_else(|| OverlayError::Unknown(value.to_string()))
    }
}

/// Which overlays are open and where keyboard focus went last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlays {
    open: BTreeSet<Overlay>,
    focus: Option<&'static str>,
}

impl Overlays {
    pub fn open(&mut self, overlay: Overlay) {
        self.open.insert(overlay);
        if let Some(target) = overlay.focus_target() {
            self.focus = Some(target);
        }
        tracing::debug!(%overlay, "overlay opened");
    }

    pub fn close(&mut self, overlay: Overlay) {
        if self.open.remove(&overlay) {
            tracing::debug!(%overlay, "overlay closed");
        }
        if self.focus.is_some() && self.focus == overlay.focus_target() {
            self.focus = None;
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }

    pub fn focus(&self) -> Option<&'static str> {
        self.focus
    }

    pub fn open_overlays(&self) -> impl Iterator<Item = Overlay> + '_ {
        self.open.iter().copied()
    }
}
