//! # Domain Types
//!
//! Core domain types used throughout Grocer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │    Category     │   │   ProductId     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id             │   │  Produce        │   │  u32 newtype    │   │
//! │  │  name           │   │  Dairy          │   │  unique across  │   │
//! │  │  price          │   └─────────────────┘   │  both lists     │   │
//! │  │  unit           │                         └─────────────────┘   │
//! │  │  image          │                                               │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are catalog-defined and immutable. Ids are assigned with the
//! data, never generated at runtime, and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Type-safe product identifier.
///
/// A positive integer unique across the entire catalog. Both categories
/// share the id space, so a `ProductId` alone is enough to find a product
/// or address a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The two fixed catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Produce,
    Dairy,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 2] = [Category::Produce, Category::Dairy];

    /// The section heading shown above the category's grid.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Category::Produce => "Fresh Produce",
            Category::Dairy => "Dairy & Eggs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Immutable once the catalog is defined. The price is a whole-unit amount,
/// `unit` is a free-text pack descriptor shown under the name ("1 lb",
/// "Dozen"), and `image` references a display asset when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier across the whole catalog.
    pub id: ProductId,

    /// Display name shown on the tile and in the cart.
    pub name: String,

    /// Price per unit, whole currency units.
    pub price: Money,

    /// Pack descriptor, display-only.
    pub unit: String,

    /// Display asset reference. The built-in catalog carries none.
    pub image: Option<String>,
}

impl Product {
    /// Creates a catalog product.
    pub fn new(id: u32, name: impl Into<String>, price: i64, unit: impl Into<String>) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::from_units(price),
            unit: unit.into(),
            image: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(id, ProductId::from(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_category_titles() {
        assert_eq!(Category::Produce.title(), "Fresh Produce");
        assert_eq!(Category::Dairy.title(), "Dairy & Eggs");
        assert_eq!(Category::ALL.len(), 2);
    }

    #[test]
    fn test_product_new() {
        let p = Product::new(1, "Fresh Apples", 99, "1 lb");
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.name, "Fresh Apples");
        assert_eq!(p.price.units(), 99);
        assert_eq!(p.unit, "1 lb");
        assert!(p.image.is_none());
    }
}
