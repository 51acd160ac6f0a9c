//! Day/night theme expressed as CSS custom properties.

use std::collections::HashMap;

use serde::Serialize;

const DARK_INK: &str = "10, 10, 20";
const LIGHT_PAPER: &str = "255, 255, 255";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    /// Settings-form value: `night` selects night, anything else day.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("night") => Theme::Night,
            _ => Theme::Day,
        }
    }

    /// Settings-form submission; only the `theme` field is read.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        Self::from_field(fields.get("theme").map(String::as_str))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Day => Palette {
                color_dark: DARK_INK,
                color_light: LIGHT_PAPER,
            },
            Theme::Night => Palette {
                color_dark: LIGHT_PAPER,
                color_light: DARK_INK,
            },
        }
    }
}

/// RGB triples assigned to `--color-dark` and `--color-light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    #[serde(rename = "--color-dark")]
    pub color_dark: &'static str,
    #[serde(rename = "--color-light")]
    pub color_light: &'static str,
}

impl Palette {
    /// Inline style declaration for the document root.
    pub fn to_css(&self) -> String {
        format!(
            "--color-dark: {}; --color-light: {};",
            self.color_dark, self.color_light
        )
    }
}

/// Interpret a `Sec-CH-Prefers-Color-Scheme` client hint.
pub fn prefers_dark_hint(value: &str) -> Option<bool> {
    match value.trim().trim_matches('"') {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}
