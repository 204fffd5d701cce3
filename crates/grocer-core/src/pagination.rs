//! # Pagination Module
//!
//! The visible-count state machine behind the Load More / Show Less
//! controls. One [`Pager`] exists per catalog category.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   states: 6, 12, 18, ...  (multiples of PAGE_SIZE, unbounded)       │
//! │                                                                     │
//! │        load_more          load_more                                 │
//! │   6 ──────────────► 12 ──────────────► 18 ── ...                    │
//! │   ▲                                     │                           │
//! │   └─────────────── show_less ───────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `visible` may exceed the filtered list length; rendering truncates via
//! [`Pager::window`] and the Load More control disappears. The pager is
//! never reset when the filter query changes. A query that shrinks the
//! list below `visible` therefore makes Show Less appear without any
//! preceding Load More click; that is intended behavior, not a defect.

use crate::types::Product;
use crate::PAGE_SIZE;

/// Per-category pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    visible: usize,
}

impl Pager {
    /// A fresh pager showing one page.
    #[must_use]
    pub const fn new() -> Self {
        Pager { visible: PAGE_SIZE }
    }

    /// Number of items the pager currently allows on screen.
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Reveals one more page. Unbounded; truncation happens at render time.
    pub fn load_more(&mut self) {
        self.visible += PAGE_SIZE;
    }

    /// Collapses back to a single page.
    pub fn show_less(&mut self) {
        self.visible = PAGE_SIZE;
    }

    /// The slice of `items` that is actually rendered: the first
    /// `min(visible, items.len())` entries.
    #[must_use]
    pub fn window<'a>(&self, items: &'a [&'a Product]) -> &'a [&'a Product] {
        &items[..self.visible.min(items.len())]
    }

    /// Whether the Load More control is offered for a list of `len` items.
    #[must_use]
    pub const fn can_load_more(&self, len: usize) -> bool {
        self.visible < len
    }

    /// Whether the Show Less control is offered for a list of `len` items.
    ///
    /// Offered only once the whole list is on screen AND more than one
    /// page is revealed. Exactly one of the two controls is visible at a
    /// time; with one page of items or fewer, neither is.
    #[must_use]
    pub const fn can_show_less(&self, len: usize) -> bool {
        !self.can_load_more(len) && self.visible > PAGE_SIZE
    }
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (1..=n as u32)
            .map(|i| Product::new(i, format!("Product {i}"), 10, "1 lb"))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let pager = Pager::new();
        assert_eq!(pager.visible(), 6);
    }

    #[test]
    fn test_load_more_steps_by_six() {
        let mut pager = Pager::new();
        pager.load_more();
        assert_eq!(pager.visible(), 12);
        pager.load_more();
        assert_eq!(pager.visible(), 18);
    }

    #[test]
    fn test_show_less_resets_to_six() {
        let mut pager = Pager::new();
        pager.load_more();
        pager.load_more();
        pager.show_less();
        assert_eq!(pager.visible(), 6);
    }

    #[test]
    fn test_window_truncates() {
        let items = products(4);
        let refs: Vec<&Product> = items.iter().collect();

        let mut pager = Pager::new();
        assert_eq!(pager.window(&refs).len(), 4);

        pager.load_more();
        // visible 12 over 4 items still renders 4, no panic
        assert_eq!(pager.window(&refs).len(), 4);
    }

    #[test]
    fn test_window_respects_visible() {
        let items = products(12);
        let refs: Vec<&Product> = items.iter().collect();

        let mut pager = Pager::new();
        assert_eq!(pager.window(&refs).len(), 6);

        pager.load_more();
        assert_eq!(pager.window(&refs).len(), 12);
    }

    #[test]
    fn test_control_visibility() {
        let mut pager = Pager::new();

        // 12 items, one page shown: only Load More
        assert!(pager.can_load_more(12));
        assert!(!pager.can_show_less(12));

        // everything shown after one Load More: only Show Less
        pager.load_more();
        assert!(!pager.can_load_more(12));
        assert!(pager.can_show_less(12));

        // single short page: neither control
        let fresh = Pager::new();
        assert!(!fresh.can_load_more(3));
        assert!(!fresh.can_show_less(3));
    }

    #[test]
    fn test_show_less_without_prior_load_more() {
        // A narrowing filter can drop the list length below `visible`
        // while visible is still expanded from an earlier, wider list.
        let mut pager = Pager::new();
        pager.load_more(); // visible 12 while browsing the full list

        // The filter now leaves 1 item. Show Less appears even though
        // Load More was pressed for a different list.
        assert!(!pager.can_load_more(1));
        assert!(pager.can_show_less(1));
    }
}
