//! # Theme State
//!
//! The session's dark/light flag plus the side effect it drives.
//!
//! ## The Presentation Effect
//! A browser frontend would reflect the flag by adding or removing a
//! `dark` class on the document root. That contract is an explicit
//! apply/revert pair on [`PresentationTarget`]: the state holder invokes
//! the matching side immediately inside every flip, so the global
//! presentation attribute can never drift from the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use grocer_core::Theme;

/// The surface that carries the global presentation attribute.
///
/// `apply_dark_mode` and `revert_dark_mode` must be symmetric: applying
/// and then reverting leaves the surface exactly as it started.
pub trait PresentationTarget: Send + Sync {
    fn apply_dark_mode(&self);
    fn revert_dark_mode(&self);
}

/// A shareable boolean presentation attribute.
///
/// The stand-in for `document.documentElement.classList` when the view is
/// a terminal: renderers read [`DarkModeFlag::is_dark`] to pick their
/// palette.
#[derive(Debug, Clone, Default)]
pub struct DarkModeFlag(Arc<AtomicBool>);

impl DarkModeFlag {
    pub fn new() -> Self {
        DarkModeFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Whether the dark attribute is currently applied.
    pub fn is_dark(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl PresentationTarget for DarkModeFlag {
    fn apply_dark_mode(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn revert_dark_mode(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Session-managed theme state.
pub struct ThemeState {
    theme: Mutex<Theme>,
    target: Box<dyn PresentationTarget>,
}

impl ThemeState {
    /// Creates theme state starting at [`Theme::Light`] and immediately
    /// reflects that onto the target.
    pub fn new(target: Box<dyn PresentationTarget>) -> Self {
        target.revert_dark_mode();
        ThemeState {
            theme: Mutex::new(Theme::Light),
            target,
        }
    }

    /// The current theme.
    pub fn current(&self) -> Theme {
        *self.theme.lock().expect("Theme mutex poisoned")
    }

    /// Flips the theme and applies the matching side of the effect pair
    /// before releasing the lock. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.theme.lock().expect("Theme mutex poisoned");
        *theme = theme.toggled();

        if theme.is_dark() {
            self.target.apply_dark_mode();
        } else {
            self.target.revert_dark_mode();
        }
        debug!(dark = theme.is_dark(), "theme toggled");

        *theme
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::new(Box::new(DarkModeFlag::new()))
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.current())
            .finish()
    }
}
