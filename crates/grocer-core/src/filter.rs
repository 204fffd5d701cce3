//! # Filter Module
//!
//! Case-insensitive product name filtering. This is the whole of the
//! storefront's "search": one substring test per product, original order
//! preserved, applied independently to each category with a single shared
//! query string.

use crate::types::Product;

/// Returns the products whose name contains `query`, case-insensitively.
///
/// ## Behavior
/// - Original order is preserved
/// - An empty query matches every product
/// - Matching is a plain substring test after lower-casing both sides
///
/// ## Example
/// ```rust
/// use grocer_core::catalog::Catalog;
/// use grocer_core::filter::filter_by_name;
///
/// let catalog = Catalog::builtin();
///
/// let hits = filter_by_name(catalog.produce(), "APPLES");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Fresh Apples");
///
/// let all = filter_by_name(catalog.produce(), "");
/// assert_eq!(all.len(), catalog.produce().len());
/// ```
#[must_use]
pub fn filter_by_name<'a>(items: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let catalog = Catalog::builtin();
        let filtered = filter_by_name(catalog.dairy(), "");

        assert_eq!(filtered.len(), catalog.dairy().len());
        for (filtered, original) in filtered.iter().zip(catalog.dairy()) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = Catalog::builtin();

        let lower = filter_by_name(catalog.produce(), "apple");
        let upper = filter_by_name(catalog.produce(), "APPLE");
        let ids_lower: Vec<_> = lower.iter().map(|p| p.id).collect();
        let ids_upper: Vec<_> = upper.iter().map(|p| p.id).collect();

        assert_eq!(ids_lower, ids_upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_substring_match() {
        let catalog = Catalog::builtin();

        let hits = filter_by_name(catalog.dairy(), "cream");
        let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cream", "Sour Cream", "Heavy Cream"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = Catalog::builtin();
        assert!(filter_by_name(catalog.produce(), "zzz").is_empty());
    }

    #[test]
    fn test_order_preserved_on_partial_match() {
        let catalog = Catalog::builtin();

        // Produce names containing "o": definition order must survive.
        let hits = filter_by_name(catalog.produce(), "o");
        let ids: Vec<u32> = hits.iter().map(|p| p.id.get()).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| {
            catalog
                .produce()
                .iter()
                .position(|p| p.id.get() == *id)
                .unwrap()
        });
        assert_eq!(ids, sorted);
    }
}
