//! # Render Module
//!
//! Text rendering of storefront snapshots. This is the demo view
//! collaborator: it consumes DTOs and produces lines, nothing else. All
//! interaction wiring lives in the REPL loop (`crate::run`).
//!
//! The layout follows the storefront page: a header with the store name,
//! search echo, cart badge and theme marker; one section per category
//! with its tiles and whichever of Load More / Show Less is offered; the
//! cart or payment overlay when open.

use std::fmt::Write as _;

use crate::commands::browse::StorefrontView;
use crate::commands::cart::CartView;
use crate::state::{ConfigState, Overlay};

/// Renders the full storefront snapshot to a text block.
pub fn render_storefront(view: &StorefrontView, config: &ConfigState) -> String {
    let mut out = String::new();

    let theme_marker = if view.theme.is_dark() { "dark" } else { "light" };
    let _ = writeln!(
        out,
        "== {} == [theme: {}]  My Cart ({})",
        view.store_name, theme_marker, view.cart_badge
    );
    if view.query.is_empty() {
        let _ = writeln!(out, "Search: <all products>");
    } else {
        let _ = writeln!(out, "Search: \"{}\"", view.query);
    }

    for section in &view.sections {
        let _ = writeln!(out, "\n-- {} ({} matching) --", section.title, section.matching);
        if section.tiles.is_empty() {
            let _ = writeln!(out, "  (no products match)");
        }
        for tile in &section.tiles {
            let stepper = if tile.in_cart > 0 {
                format!("  [- {} +]", tile.in_cart)
            } else {
                "  [ADD]".to_string()
            };
            let _ = writeln!(
                out,
                "  #{:<3} {:<16} {:<9} {:>6}{}",
                tile.id,
                tile.name,
                tile.unit,
                config.format_currency(tile.price),
                stepper
            );
        }
        if section.can_load_more {
            let _ = writeln!(out, "  [Load More]");
        } else if section.can_show_less {
            let _ = writeln!(out, "  [Show Less]");
        }
    }

    match view.overlay {
        Overlay::Hidden => {}
        Overlay::Cart => {
            let _ = writeln!(out, "\n(cart overlay open; `cart` to reprint)");
        }
        Overlay::PaymentSuccess => {
            let _ = writeln!(out, "\n*** Payment Successful! ***");
            let _ = writeln!(out, "Your order has been placed successfully.");
            let _ = writeln!(out, "[Continue Shopping]");
        }
    }

    out
}

/// Renders the cart overlay body.
pub fn render_cart(view: &CartView, config: &ConfigState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-- My Cart --");

    if view.lines.is_empty() {
        let _ = writeln!(out, "Your cart is empty.");
        return out;
    }

    for line in &view.lines {
        let _ = writeln!(
            out,
            "  {} (x{})  {}  [Remove #{}]",
            line.name,
            line.quantity,
            config.format_currency(line.line_total()),
            line.id
        );
    }
    let _ = writeln!(
        out,
        "Total: {}",
        config.format_currency(view.totals.total_amount)
    );
    let _ = writeln!(out, "[Proceed to Payment]");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use crate::state::{
        BrowseState, CartState, ConfigState, OverlayState, ThemeState,
    };
    use grocer_core::{Catalog, ProductId};

    fn snapshot(cart: &CartState) -> StorefrontView {
        commands::browse::storefront_view(
            &Catalog::builtin(),
            &ConfigState::default(),
            &BrowseState::new(),
            cart,
            &ThemeState::default(),
            &OverlayState::new(),
        )
    }

    #[test]
    fn test_render_header_and_sections() {
        let cart = CartState::new();
        let text = render_storefront(&snapshot(&cart), &ConfigState::default());

        assert!(text.contains("== Grocery Store =="));
        assert!(text.contains("My Cart (0)"));
        assert!(text.contains("-- Fresh Produce (12 matching) --"));
        assert!(text.contains("-- Dairy & Eggs (12 matching) --"));
        assert!(text.contains("[Load More]"));
        assert!(text.contains("₹99"));
    }

    #[test]
    fn test_render_stepper_for_carted_product() {
        let cart = CartState::new();
        let catalog = Catalog::builtin();
        commands::cart::add_to_cart(&catalog, &cart, ProductId::new(1)).unwrap();

        let text = render_storefront(&snapshot(&cart), &ConfigState::default());
        assert!(text.contains("[- 1 +]"));
        assert!(text.contains("My Cart (1)"));
    }

    #[test]
    fn test_render_empty_cart_message() {
        let cart = CartState::new();
        let text = render_cart(&commands::cart::get_cart(&cart), &ConfigState::default());
        assert!(text.contains("Your cart is empty."));
        assert!(!text.contains("Proceed to Payment"));
    }

    #[test]
    fn test_render_cart_lines_and_total() {
        let cart = CartState::new();
        let catalog = Catalog::builtin();
        let id = ProductId::new(1);
        commands::cart::add_to_cart(&catalog, &cart, id).unwrap();
        commands::cart::add_to_cart(&catalog, &cart, id).unwrap();

        let text = render_cart(&commands::cart::get_cart(&cart), &ConfigState::default());
        assert!(text.contains("Fresh Apples (x2)"));
        assert!(text.contains("Total: ₹198"));
        assert!(text.contains("[Proceed to Payment]"));
    }
}
