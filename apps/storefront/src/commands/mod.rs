//! # Commands Module
//!
//! One command per user intent. This is the entire surface a view may
//! drive; every control the storefront renders lands on exactly one
//! function here.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── browse.rs   ◄─── Search query, pagination, the storefront view
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── overlay.rs  ◄─── Cart / payment-success modal transitions
//! ├── theme.rs    ◄─── Dark mode toggle
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs browse state
//! fn load_more(browse: &BrowseState, category: Category) -> usize
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &Catalog, cart: &CartState, id: ProductId)
//!     -> Result<CartView, ApiError>
//! ```
//!
//! Mutating commands return the state a view must redraw. The composed
//! [`browse::storefront_view`] read rebuilds the full render-ready
//! snapshot from all state types at once.

pub mod browse;
pub mod cart;
pub mod config;
pub mod overlay;
pub mod theme;
