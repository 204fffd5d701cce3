//! # Catalog Module
//!
//! The compiled-in product catalog: two fixed, ordered lists of products,
//! one per [`Category`]. There is no fetch and no mutation; the data ships
//! with the binary and is validated once at startup.
//!
//! ## Id Space
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  produce: 1..=6, 13..=18        dairy: 7..=12, 19..=24              │
//! │                                                                     │
//! │  Ids are unique across BOTH lists. A ProductId alone addresses a    │
//! │  product anywhere in the catalog (see Catalog::find).               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interleaved ranges are historical: each list started with six
//! products and gained a second batch later.

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{Category, Product, ProductId};
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Catalog
// =============================================================================

/// The fixed set of purchasable products, partitioned into categories.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    produce: Vec<Product>,
    dairy: Vec<Product>,
}

impl Catalog {
    /// Builds the built-in grocery catalog.
    pub fn builtin() -> Self {
        Catalog {
            produce: vec![
                Product::new(1, "Fresh Apples", 99, "1 lb"),
                Product::new(2, "Bananas", 59, "1 lb"),
                Product::new(3, "Carrots", 49, "1 lb"),
                Product::new(4, "Tomatoes", 79, "1 lb"),
                Product::new(5, "Lettuce", 69, "1 head"),
                Product::new(6, "Broccoli", 89, "1 lb"),
                Product::new(13, "Spinach", 79, "1 bunch"),
                Product::new(14, "Bell Peppers", 99, "1 lb"),
                Product::new(15, "Cucumbers", 69, "1 lb"),
                Product::new(16, "Potatoes", 59, "1 lb"),
                Product::new(17, "Onions", 49, "1 lb"),
                Product::new(18, "Garlic", 89, "1 head"),
            ],
            dairy: vec![
                Product::new(7, "Organic Eggs", 199, "Dozen"),
                Product::new(8, "Milk", 89, "1 gallon"),
                Product::new(9, "Cheese", 299, "1 lb"),
                Product::new(10, "Yogurt", 129, "32 oz"),
                Product::new(11, "Butter", 149, "1 lb"),
                Product::new(12, "Cream", 99, "16 oz"),
                Product::new(19, "Sour Cream", 109, "16 oz"),
                Product::new(20, "Cottage Cheese", 179, "16 oz"),
                Product::new(21, "Greek Yogurt", 159, "32 oz"),
                Product::new(22, "Almond Milk", 139, "1 gallon"),
                Product::new(23, "Goat Cheese", 349, "8 oz"),
                Product::new(24, "Heavy Cream", 119, "16 oz"),
            ],
        }
    }

    /// Builds a catalog from explicit lists. Used by tests.
    pub fn from_parts(produce: Vec<Product>, dairy: Vec<Product>) -> Self {
        Catalog { produce, dairy }
    }

    /// The produce list, in display order.
    #[must_use]
    pub fn produce(&self) -> &[Product] {
        &self.produce
    }

    /// The dairy list, in display order.
    #[must_use]
    pub fn dairy(&self) -> &[Product] {
        &self.dairy
    }

    /// The list for a category.
    #[must_use]
    pub fn category_items(&self, category: Category) -> &[Product] {
        match category {
            Category::Produce => &self.produce,
            Category::Dairy => &self.dairy,
        }
    }

    /// Looks a product up by id, across both categories.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.produce
            .iter()
            .chain(self.dairy.iter())
            .find(|p| p.id == id)
    }

    /// Total number of products across both categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.produce.len() + self.dairy.len()
    }

    /// True when both categories are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.produce.is_empty() && self.dairy.is_empty()
    }

    /// Checks the catalog's data-definition invariants.
    ///
    /// ## Checks
    /// - Neither category is empty
    /// - Every name passes [`validate_product_name`]
    /// - Every price passes [`validate_price`]
    /// - Ids are unique across the whole catalog
    ///
    /// A failure here is a bug in the compiled-in data. The application
    /// asserts this at startup instead of recovering at runtime.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for category in Category::ALL {
            if self.category_items(category).is_empty() {
                return Err(ValidationError::EmptyCategory {
                    category: category.title().to_string(),
                });
            }
        }

        let mut seen: Vec<ProductId> = Vec::with_capacity(self.len());
        for product in self.produce.iter().chain(self.dairy.iter()) {
            validate_product_name(&product.name)?;
            validate_price(product.price)?;

            if seen.contains(&product.id) {
                return Err(ValidationError::DuplicateId { id: product.id });
            }
            seen.push(product.id);
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
