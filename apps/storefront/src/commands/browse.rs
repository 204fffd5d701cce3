//! # Browse Commands
//!
//! The search query, the per-category pagination intents, and the
//! composed storefront view.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  User types "app" in the search box                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  set_query(browse, "app")     (shared query, pagers untouched)      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  storefront_view(...)                                               │
//! │       │                                                             │
//! │       ├── produce: filter ──► pager.window ──► tiles                │
//! │       └── dairy:   filter ──► pager.window ──► tiles                │
//! │                                                                     │
//! │  Each tile carries its in-cart quantity so the grid can render      │
//! │  ADD vs the +/- stepper without a second lookup.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BrowseState, CartState, ConfigState, Overlay, OverlayState, ThemeState};
use grocer_core::filter::filter_by_name;
use grocer_core::validation::validate_search_query;
use grocer_core::{Catalog, Category, Money, ProductId, Theme};

// =============================================================================
// View DTOs
// =============================================================================

/// One product tile in a category grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTile {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub unit: String,
    pub image: Option<String>,
    /// Quantity of this product already in the cart; 0 renders the ADD
    /// button, anything else renders the +/- stepper.
    pub in_cart: u32,
}

/// One category section: heading, visible tiles, and its two controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: Category,
    pub title: String,
    /// The first `min(visible, matching)` filtered products.
    pub tiles: Vec<ProductTile>,
    /// How many products match the query in total.
    pub matching: usize,
    /// The pager's current visible count.
    pub visible: usize,
    pub can_load_more: bool,
    pub can_show_less: bool,
}

/// The full render-ready storefront snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    pub store_name: String,
    pub query: String,
    /// Number of cart lines, shown as "My Cart (N)".
    pub cart_badge: usize,
    pub theme: Theme,
    pub overlay: Overlay,
    /// Category sections in display order: produce, then dairy.
    pub sections: Vec<CategoryView>,
}

// =============================================================================
// Commands
// =============================================================================

/// Replaces the shared search query.
///
/// Both category grids re-filter against the new query; neither pager is
/// touched.
///
/// ## Returns
/// The stored (trimmed) query.
pub fn set_query(browse: &BrowseState, raw: &str) -> Result<String, ApiError> {
    debug!(raw, "set_query command");

    let query = validate_search_query(raw).map_err(|e| ApiError::validation(e.to_string()))?;
    browse.with_browse_mut(|b| b.query = query.clone());
    Ok(query)
}

/// Reveals one more page in a category.
///
/// ## Returns
/// The category's new visible count.
pub fn load_more(browse: &BrowseState, category: Category) -> usize {
    debug!(?category, "load_more command");

    browse.with_browse_mut(|b| {
        let pager = b.pager_mut(category);
        pager.load_more();
        pager.visible()
    })
}

/// Collapses a category back to one page.
///
/// ## Returns
/// The category's new visible count (always one page).
pub fn show_less(browse: &BrowseState, category: Category) -> usize {
    debug!(?category, "show_less command");

    browse.with_browse_mut(|b| {
        let pager = b.pager_mut(category);
        pager.show_less();
        pager.visible()
    })
}

/// Builds the full storefront snapshot from every state type.
///
/// Read-only; this is what a view renders after any intent.
pub fn storefront_view(
    catalog: &Catalog,
    config: &ConfigState,
    browse: &BrowseState,
    cart: &CartState,
    theme: &ThemeState,
    overlay: &OverlayState,
) -> StorefrontView {
    browse.with_browse(|b| {
        let sections = Category::ALL
            .iter()
            .map(|&category| {
                let filtered = filter_by_name(catalog.category_items(category), &b.query);
                let pager = b.pager(category);

                let tiles = pager
                    .window(&filtered)
                    .iter()
                    .map(|product| ProductTile {
                        id: product.id,
                        name: product.name.clone(),
                        price: product.price,
                        unit: product.unit.clone(),
                        image: product.image.clone(),
                        in_cart: cart.with_cart(|c| c.quantity_of(product.id)),
                    })
                    .collect();

                CategoryView {
                    category,
                    title: category.title().to_string(),
                    tiles,
                    matching: filtered.len(),
                    visible: pager.visible(),
                    can_load_more: pager.can_load_more(filtered.len()),
                    can_show_less: pager.can_show_less(filtered.len()),
                }
            })
            .collect();

        StorefrontView {
            store_name: config.store_name.clone(),
            query: b.query.clone(),
            cart_badge: cart.with_cart(|c| c.line_count()),
            theme: theme.current(),
            overlay: overlay.current(),
            sections,
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (
        Catalog,
        ConfigState,
        BrowseState,
        CartState,
        ThemeState,
        OverlayState,
    ) {
        (
            Catalog::builtin(),
            ConfigState::default(),
            BrowseState::new(),
            CartState::new(),
            ThemeState::default(),
            OverlayState::new(),
        )
    }

    #[test]
    fn test_initial_view_shows_one_page_per_section() {
        let (catalog, config, browse, cart, theme, overlay) = fixture();
        let view = storefront_view(&catalog, &config, &browse, &cart, &theme, &overlay);

        assert_eq!(view.sections.len(), 2);
        for section in &view.sections {
            assert_eq!(section.tiles.len(), 6);
            assert_eq!(section.matching, 12);
            assert!(section.can_load_more);
            assert!(!section.can_show_less);
        }
        assert_eq!(view.cart_badge, 0);
        assert_eq!(view.overlay, Overlay::Hidden);
        assert_eq!(view.theme, Theme::Light);
    }

    #[test]
    fn test_search_narrows_both_sections() {
        let (catalog, config, browse, cart, theme, overlay) = fixture();

        set_query(&browse, "apples").unwrap();
        let view = storefront_view(&catalog, &config, &browse, &cart, &theme, &overlay);

        let produce = &view.sections[0];
        assert_eq!(produce.matching, 1);
        assert_eq!(produce.tiles.len(), 1);
        assert_eq!(produce.tiles[0].id, ProductId::new(1));

        let dairy = &view.sections[1];
        assert_eq!(dairy.matching, 0);
        assert!(dairy.tiles.is_empty());
    }

    #[test]
    fn test_set_query_trims_and_bounds() {
        let (_, _, browse, _, _, _) = fixture();

        assert_eq!(set_query(&browse, "  milk ").unwrap(), "milk");
        assert!(set_query(&browse, &"q".repeat(200)).is_err());
        // the failed update must not clobber the stored query
        assert_eq!(browse.with_browse(|b| b.query.clone()), "milk");
    }

    #[test]
    fn test_load_more_then_show_less_roundtrip() {
        let (catalog, config, browse, cart, theme, overlay) = fixture();

        assert_eq!(load_more(&browse, Category::Produce), 12);
        let view = storefront_view(&catalog, &config, &browse, &cart, &theme, &overlay);
        let produce = &view.sections[0];
        assert_eq!(produce.tiles.len(), 12);
        assert!(!produce.can_load_more);
        assert!(produce.can_show_less);

        assert_eq!(show_less(&browse, Category::Produce), 6);
    }

    #[test]
    fn test_tiles_carry_cart_quantity() {
        let (catalog, config, browse, cart, theme, overlay) = fixture();

        let apples = catalog.find(ProductId::new(1)).unwrap().clone();
        cart.with_cart_mut(|c| {
            c.add(&apples);
            c.add(&apples);
        });

        let view = storefront_view(&catalog, &config, &browse, &cart, &theme, &overlay);
        let tile = &view.sections[0].tiles[0];
        assert_eq!(tile.id, ProductId::new(1));
        assert_eq!(tile.in_cart, 2);
        assert_eq!(view.cart_badge, 1);
    }

    #[test]
    fn test_narrowing_filter_can_offer_show_less_without_load_more() {
        let (catalog, config, browse, cart, theme, overlay) = fixture();

        load_more(&browse, Category::Produce);
        set_query(&browse, "apples").unwrap();

        let view = storefront_view(&catalog, &config, &browse, &cart, &theme, &overlay);
        let produce = &view.sections[0];
        assert_eq!(produce.visible, 12);
        assert_eq!(produce.matching, 1);
        assert!(!produce.can_load_more);
        assert!(produce.can_show_less);
    }
}
