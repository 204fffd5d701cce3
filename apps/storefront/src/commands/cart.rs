//! # Cart Commands
//!
//! Cart manipulation intents.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                   │
//! │                                                                     │
//! │  ┌──────────┐      ┌──────────┐      ┌─────────────────┐            │
//! │  │  Empty   │─────►│ In Cart  │─────►│ Payment Success │            │
//! │  │  Cart    │      │          │      │ (display only)  │            │
//! │  └──────────┘      └──────────┘      └─────────────────┘            │
//! │                        │                                            │
//! │                   add_to_cart                                       │
//! │                   update_cart_item                                  │
//! │                   remove_from_cart                                  │
//! │                                                                     │
//! │  The payment-success transition never touches the cart; it is an    │
//! │  overlay switch (see overlay.rs). No order record is created.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;
use grocer_core::{Cart, CartLine, Catalog, Money, ProductId};

// =============================================================================
// View DTOs
// =============================================================================

/// Cart totals summary for view responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Unique lines; the header badge.
    pub line_count: usize,
    /// Sum of quantities across lines.
    pub total_quantity: u64,
    /// Sum of price × quantity across lines.
    pub total_amount: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_amount: cart.total_amount(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartView {
    debug!("get_cart command");
    cart.with_cart(|cart| CartView::from(cart))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by 1
/// - Product not in cart: appended as a new line with quantity 1
///
/// Both the grid's ADD button and its "+" stepper land here.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog. A view that only
/// dispatches rendered ids never sees it.
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartState,
    product_id: ProductId,
) -> Result<CartView, ApiError> {
    debug!(%product_id, "add_to_cart command");

    let product = catalog
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add(product);
        CartView::from(&*c)
    }))
}

/// Replaces the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0: removes the line (the "-" stepper at quantity 1)
/// - Line present: quantity replaced, position preserved
/// - Line absent with quantity > 0: no-op; logged and returned unchanged
pub fn update_cart_item(cart: &CartState, product_id: ProductId, quantity: u32) -> CartView {
    debug!(%product_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.set_quantity(product_id, quantity) && quantity > 0 {
            debug!(%product_id, "update_cart_item on absent line ignored");
        }
        CartView::from(&*c)
    })
}

/// Removes a line from the cart. Absent ids are a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartView {
    debug!(%product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(product_id);
        CartView::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn fixture() -> (Catalog, CartState) {
        (Catalog::builtin(), CartState::new())
    }

    #[test]
    fn test_add_twice_accumulates_one_line() {
        let (catalog, cart) = fixture();
        let id = ProductId::new(1); // Fresh Apples, ₹99

        add_to_cart(&catalog, &cart, id).unwrap();
        let view = add_to_cart(&catalog, &cart, id).unwrap();

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.totals.total_amount.units(), 198);
        assert_eq!(view.totals.line_count, 1);
    }

    #[test]
    fn test_add_unknown_id_is_not_found() {
        let (catalog, cart) = fixture();

        let err = add_to_cart(&catalog, &cart, ProductId::new(999)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&cart).totals.line_count, 0);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let (catalog, cart) = fixture();
        let id = ProductId::new(2);

        add_to_cart(&catalog, &cart, id).unwrap();
        let view = update_cart_item(&cart, id, 0);

        assert!(view.lines.is_empty());
        assert_eq!(view.totals.total_amount, Money::zero());
    }

    #[test]
    fn test_update_absent_line_returns_cart_unchanged() {
        let (catalog, cart) = fixture();
        add_to_cart(&catalog, &cart, ProductId::new(1)).unwrap();

        let view = update_cart_item(&cart, ProductId::new(42), 3);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].id, ProductId::new(1));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (_, cart) = fixture();
        let view = remove_from_cart(&cart, ProductId::new(1));
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_empty_cart_totals() {
        let (_, cart) = fixture();
        let view = get_cart(&cart);
        assert_eq!(view.totals.total_amount, Money::zero());
        assert_eq!(view.totals.total_quantity, 0);
    }
}
