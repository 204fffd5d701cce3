//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer                             │
//! │                                                                     │
//! │  View                        Session Layer                          │
//! │  ────                        ─────────────                          │
//! │                                                                     │
//! │  dispatch(AddToCart(id))                                            │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<T, ApiError>                                          │  │
//! │  │         │                                                     │  │
//! │  │  Unknown id? ──── CoreError::ProductNotFound ──┐              │  │
//! │  │         │                                      ▼              │  │
//! │  │  Bad query? ───── ValidationError ────────── ApiError ──────► │  │
//! │  │         │                                                     │  │
//! │  │  Success ───────────────────────────────────────────────────► │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  The view receives { "code": "NOT_FOUND", "message": "..." }        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most storefront operations are total; the error surface is small and
//! every variant is something a view can show verbatim.

use serde::Serialize;

use grocer_core::CoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Checkout requested on an empty cart
    EmptyCart,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an empty-cart error.
    pub fn empty_cart() -> Self {
        ApiError::new(ErrorCode::EmptyCart, "Your cart is empty.")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ProductId;

    #[test]
    fn test_not_found_from_core() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(42)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ApiError::empty_cart();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_CART");
        assert_eq!(json["message"], "Your cart is empty.");
    }
}
