//! # Overlay Commands
//!
//! Modal transitions: opening and closing the cart overlay and the
//! payment-success acknowledgment.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, Overlay, OverlayState};

/// Opens the cart overlay.
pub fn open_cart(overlay: &OverlayState) -> Overlay {
    debug!("open_cart command");
    overlay.set(Overlay::Cart)
}

/// Closes the cart overlay.
pub fn close_cart(overlay: &OverlayState) -> Overlay {
    debug!("close_cart command");
    overlay.set(Overlay::Hidden)
}

/// Switches from the cart overlay to the payment-success acknowledgment.
///
/// Display-only: the cart is left untouched and no order exists
/// afterwards. The view gates this on a non-empty cart; the command
/// enforces the same gate for callers that bypass the button.
///
/// ## Errors
/// `EMPTY_CART` when the cart has no lines.
pub fn proceed_to_payment(cart: &CartState, overlay: &OverlayState) -> Result<Overlay, ApiError> {
    debug!("proceed_to_payment command");

    if cart.with_cart(|c| c.is_empty()) {
        return Err(ApiError::empty_cart());
    }

    Ok(overlay.set(Overlay::PaymentSuccess))
}

/// Dismisses the payment-success acknowledgment.
pub fn continue_shopping(overlay: &OverlayState) -> Overlay {
    debug!("continue_shopping command");
    overlay.set(Overlay::Hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use grocer_core::{Catalog, ProductId};

    #[test]
    fn test_open_close_cart() {
        let overlay = OverlayState::new();

        assert_eq!(open_cart(&overlay), Overlay::Cart);
        assert_eq!(close_cart(&overlay), Overlay::Hidden);
    }

    #[test]
    fn test_proceed_requires_non_empty_cart() {
        let overlay = OverlayState::new();
        let cart = CartState::new();
        open_cart(&overlay);

        let err = proceed_to_payment(&cart, &overlay).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        // the rejected transition leaves the cart overlay up
        assert_eq!(overlay.current(), Overlay::Cart);
    }

    #[test]
    fn test_full_checkout_display_flow() {
        let overlay = OverlayState::new();
        let cart = CartState::new();
        let catalog = Catalog::builtin();
        let apples = catalog.find(ProductId::new(1)).unwrap().clone();
        cart.with_cart_mut(|c| c.add(&apples));

        open_cart(&overlay);
        assert_eq!(
            proceed_to_payment(&cart, &overlay).unwrap(),
            Overlay::PaymentSuccess
        );

        // the cart survives the acknowledgment untouched
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);

        assert_eq!(continue_shopping(&overlay), Overlay::Hidden);
    }
}
