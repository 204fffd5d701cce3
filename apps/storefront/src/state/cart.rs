//! # Cart State
//!
//! Holds the session's live [`Cart`] behind a mutex.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` so the session can be shared
//! with view callbacks. Only one intent is processed at a time, so the
//! lock is never contended in practice; it makes the sharing sound.

use std::sync::{Arc, Mutex};

use grocer_core::Cart;

/// Session-managed cart state.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total_amount());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::{Product, ProductId};

    #[test]
    fn test_with_cart_roundtrip() {
        let state = CartState::new();
        let product = Product::new(1, "Fresh Apples", 99, "1 lb");

        state.with_cart_mut(|cart| cart.add(&product));
        state.with_cart_mut(|cart| cart.add(&product));

        let (count, qty, total) = state.with_cart(|cart| {
            (
                cart.line_count(),
                cart.quantity_of(ProductId::new(1)),
                cart.total_amount().units(),
            )
        });
        assert_eq!(count, 1);
        assert_eq!(qty, 2);
        assert_eq!(total, 198);
    }
}
