//! # grocer-core: Pure Business Logic for Grocer
//!
//! This crate is the **heart** of the Grocer storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Grocer Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                     View Collaborator                       │   │
//! │  │    Search box ──► Product grid ──► Cart overlay ──► Theme   │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ user intents                      │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 Session Commands (apps/storefront)          │   │
//! │  │    set_query, add_to_cart, load_more, toggle_theme, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐ ┌───────┐ ┌──────┐ ┌────────┐ ┌───────────┐  │   │
//! │  │   │ catalog │ │ money │ │ cart │ │ filter │ │pagination │  │   │
//! │  │   └─────────┘ └───────┘ └──────┘ └────────┘ └───────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The compiled-in product catalog
//! - [`filter`] - Case-insensitive product name filtering
//! - [`pagination`] - The visible-count state machine behind Load More
//! - [`cart`] - The cart state machine and its totals
//! - [`theme`] - The dark/light presentation flag
//! - [`error`] - Domain error types
//! - [`validation`] - Data-definition and input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are whole currency units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::catalog::Catalog;
//! use grocer_core::cart::Cart;
//! use grocer_core::filter::filter_by_name;
//!
//! let catalog = Catalog::builtin();
//! let apples = filter_by_name(catalog.produce(), "apples");
//! assert_eq!(apples.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add(apples[0]);
//! cart.add(apples[0]);
//! assert_eq!(cart.total_amount().units(), 198);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod pagination;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocer_core::Money` instead of
// `use grocer_core::money::Money`.

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pagination::Pager;
pub use theme::Theme;
pub use types::{Category, Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products a category reveals at a time.
///
/// Each grid starts at one page, Load More reveals one more page, and
/// Show Less collapses back to one page.
pub const PAGE_SIZE: usize = 6;

/// Maximum length of a search query, in characters.
///
/// Longer input is rejected before it reaches the filter.
pub const MAX_QUERY_LEN: usize = 100;

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LEN: usize = 200;
