//! # Cart Module
//!
//! The cart state machine: an insertion-ordered list of lines, one per
//! product id, each carrying its own quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  View Action              Operation              State Change       │
//! │  ───────────              ─────────              ────────────       │
//! │                                                                     │
//! │  ADD / "+" ─────────────► add() ───────────────► upsert, qty += 1   │
//! │                                                                     │
//! │  "-" ───────────────────► set_quantity(q-1) ───► update or drop     │
//! │                                                                     │
//! │  Remove ────────────────► remove() ────────────► drop line          │
//! │                                                                     │
//! │  Cart total ────────────► total_amount() ──────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every stored line has quantity >= 1; reaching 0 removes the line
//! - Lines keep insertion order; updates happen in place

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// One product's entry in the cart.
///
/// Carries a snapshot of the product's display fields. The catalog is
/// immutable, so the snapshot can never diverge from it; it exists so the
/// cart renders without a catalog lookup per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product id this line belongs to.
    pub id: ProductId,

    /// Product name at time of adding.
    pub name: String,

    /// Unit price at time of adding.
    pub price: Money,

    /// Pack descriptor, display-only.
    pub unit: String,

    /// Display asset reference, if any.
    pub image: Option<String>,

    /// Quantity in cart, always >= 1.
    pub quantity: u32,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            unit: product.unit.clone(),
            image: product.image.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// The line total (unit price × quantity).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Created empty at session start, mutated only through the operations
/// below, and discarded with the session. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1, the line
    ///   keeps its position
    /// - Product not in cart: a new line with quantity 1 is appended
    ///
    /// Infallible; the view's ADD and "+" controls both land here.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product));
    }

    /// Removes the line for a product id.
    ///
    /// ## Returns
    /// `true` if a line was removed, `false` if the id was absent. An
    /// absent id is a no-op, not an error.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity == 0`: equivalent to [`Cart::remove`]
    /// - line exists: quantity replaced in place, position preserved
    /// - line absent and `quantity > 0`: no-op (the view only exposes
    ///   quantity controls on lines that exist, so this path is never
    ///   reached through the UI; see DESIGN.md)
    ///
    /// ## Returns
    /// `true` if the cart changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// The stored quantity for a product id, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Sum of price × quantity over all lines. Zero for an empty cart.
    #[must_use]
    pub fn total_amount(&self) -> Money {
        Money::from_units(self.lines.iter().map(|l| l.line_total().units()).sum())
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of unique lines. This is the header badge count.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Checks if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops every line and restarts the cart's lifetime.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// When the cart was created or last cleared.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
