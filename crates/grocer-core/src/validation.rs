//! # Validation Module
//!
//! Input and data-definition validation for Grocer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Types (Rust)                                              │
//! │  ├── ProductId, Money, quantities are typed, not stringly           │
//! │  └── Shapes enforced at compile time                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Catalog definition checks, asserted once at startup            │
//! │  └── Search query bounds, applied at the command boundary           │
//! │                                                                     │
//! │  Runtime cart operations are total and need no validation.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::validation::{validate_product_name, validate_search_query};
//!
//! validate_product_name("Fresh Apples").unwrap();
//! assert_eq!(validate_search_query("  apples ").unwrap(), "apples");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_NAME_LEN, MAX_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Organic Eggs").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (an empty query matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price.
///
/// ## Rules
/// - Must be positive (> 0); the catalog has no free items
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Fresh Apples").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("apples").unwrap(), "apples");
        assert_eq!(validate_search_query("  apples ").unwrap(), "apples");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_units(99)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_units(-10)).is_err());
    }
}
