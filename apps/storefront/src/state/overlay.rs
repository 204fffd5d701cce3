//! # Overlay State
//!
//! Which modal, if any, sits on top of the product grids.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │              open_cart                proceed_to_payment            │
//! │   Hidden ──────────────────► Cart ──────────────────► PaymentOk     │
//! │     ▲                         │                           │         │
//! │     │        close_cart       │                           │         │
//! │     ◄─────────────────────────┘                           │         │
//! │     │                  continue_shopping                  │         │
//! │     ◄─────────────────────────────────────────────────────┘         │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Proceeding to payment shows a static acknowledgment. No payment is
//! processed and no order record exists; the transition is pure display.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// The modal currently shown over the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// No modal; the grids are interactive.
    #[default]
    Hidden,

    /// The cart overlay.
    Cart,

    /// The "Payment Successful!" acknowledgment.
    PaymentSuccess,
}

/// Session-managed overlay state.
#[derive(Debug, Default)]
pub struct OverlayState {
    inner: Mutex<Overlay>,
}

impl OverlayState {
    pub fn new() -> Self {
        OverlayState {
            inner: Mutex::new(Overlay::Hidden),
        }
    }

    /// The currently visible overlay.
    pub fn current(&self) -> Overlay {
        *self.inner.lock().expect("Overlay mutex poisoned")
    }

    /// Replaces the visible overlay and returns the new value.
    pub fn set(&self, overlay: Overlay) -> Overlay {
        let mut current = self.inner.lock().expect("Overlay mutex poisoned");
        *current = overlay;
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert_eq!(OverlayState::new().current(), Overlay::Hidden);
    }

    #[test]
    fn test_set_and_read_back() {
        let state = OverlayState::new();
        assert_eq!(state.set(Overlay::Cart), Overlay::Cart);
        assert_eq!(state.current(), Overlay::Cart);

        state.set(Overlay::PaymentSuccess);
        assert_eq!(state.current(), Overlay::PaymentSuccess);

        state.set(Overlay::Hidden);
        assert_eq!(state.current(), Overlay::Hidden);
    }
}
