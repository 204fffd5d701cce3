//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  grocer-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Data-definition / input failures            │
//! │                                                                     │
//! │  Storefront API errors (in app)                                     │
//! │  └── ApiError         - What the view sees (serialized)             │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → ApiError → View                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most storefront operations are total: removing an absent cart line is a
//! no-op and filtering never fails. The variants below cover the two things
//! that can actually go wrong: an unknown product id arriving at the
//! command boundary, and catalog data that violates its own definition.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    ///
    /// ## When This Occurs
    /// The view only ever dispatches ids it rendered, so in a well-behaved
    /// session this is unreachable. It exists because the command surface
    /// accepts any id, rendered or not.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Data-definition and input validation errors.
///
/// A failing catalog check is a bug in the compiled-in data, asserted at
/// startup rather than recovered at runtime.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// The same product id appears twice in the catalog.
    #[error("duplicate product id: {id}")]
    DuplicateId { id: ProductId },

    /// A catalog category has no products.
    #[error("catalog category {category} is empty")]
    EmptyCategory { category: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(99));
        assert_eq!(err.to_string(), "product not found: 99");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::DuplicateId {
            id: ProductId::new(7),
        };
        assert_eq!(err.to_string(), "duplicate product id: 7");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
