//! # Theme Commands
//!
//! The dark mode toggle.

use tracing::debug;

use crate::state::ThemeState;
use grocer_core::Theme;

/// Flips the theme. The presentation effect is applied inside the flip,
/// so by the time this returns the global attribute already matches.
pub fn toggle_theme(theme: &ThemeState) -> Theme {
    debug!("toggle_theme command");
    theme.toggle()
}

/// The current theme.
pub fn get_theme(theme: &ThemeState) -> Theme {
    debug!("get_theme command");
    theme.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DarkModeFlag;

    #[test]
    fn test_toggle_roundtrip() {
        let flag = DarkModeFlag::new();
        let theme = ThemeState::new(Box::new(flag.clone()));

        assert_eq!(toggle_theme(&theme), Theme::Dark);
        assert!(flag.is_dark());

        assert_eq!(toggle_theme(&theme), Theme::Light);
        assert!(!flag.is_dark());
        assert_eq!(get_theme(&theme), Theme::Light);
    }
}
