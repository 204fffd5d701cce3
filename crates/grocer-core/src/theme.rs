//! # Theme Module
//!
//! The dark/light presentation flag. Session-scoped, defaults to light,
//! flipped by the header toggle. Applying the flag to an actual surface is
//! the app layer's job (see the storefront's `ThemeState`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The two presentation themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// True for [`Theme::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}
