// MarketView - core/filter.rs
//
// Composable filter engine for catalog products.
// All three filters (search text, categories, price range) are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Category, Product};
use crate::util::constants::{PRICE_SLIDER_MAX, PRICE_SLIDER_MIN};
use std::collections::HashSet;

// =============================================================================
// Price range
// =============================================================================

/// Inclusive price window. `min <= max` holds after every constructor
/// and setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Build a range from two bounds given in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Move the lower bound; drags the upper bound along if it is passed.
    pub fn set_min(&mut self, value: u32) {
        self.min = value;
        if self.max < value {
            self.max = value;
        }
    }

    /// Move the upper bound; drags the lower bound along if it is passed.
    pub fn set_max(&mut self, value: u32) {
        self.max = value;
        if self.min > value {
            self.min = value;
        }
    }

    /// True if `price` lies inside the range, bounds included.
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX)
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Inclusive price window.
    pub price_range: PriceRange,

    /// Categories to include (empty = all).
    pub selected_categories: HashSet<Category>,

    /// Substring name search (case-insensitive). Empty = no filter.
    pub search_term: String,
}

impl FilterState {
    /// Returns true if the state equals the initial page state.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Add `category` to the selection if absent, remove it if present.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
        tracing::debug!(
            category = category.label(),
            selected = self.selected_categories.contains(&category),
            "Category toggled"
        );
    }

    /// One-line summary of the active filters for the status bar.
    ///
    /// Categories are listed in checkbox order so the text is stable.
    pub fn describe(&self) -> String {
        let mut parts = vec![format!(
            "${}-${}",
            self.price_range.min(),
            self.price_range.max()
        )];
        if !self.selected_categories.is_empty() {
            let labels: Vec<&str> = Category::all()
                .iter()
                .filter(|c| self.selected_categories.contains(*c))
                .map(Category::label)
                .collect();
            parts.push(labels.join(", "));
        }
        if !self.search_term.is_empty() {
            parts.push(format!("\"{}\"", self.search_term));
        }
        parts.join(" \u{00b7} ")
    }
}

/// Apply filters to a slice of products, returning indices of matching products.
///
/// Indices keep catalog order and let callers borrow from the original slice.
pub fn apply_filters(products: &[Product], filter: &FilterState) -> Vec<usize> {
    let term_lower = filter.search_term.to_lowercase();

    products
        .iter()
        .enumerate()
        .filter(|(_, product)| matches_all(product, filter, &term_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single product matches all active filters.
fn matches_all(product: &Product, filter: &FilterState, term_lower: &str) -> bool {
    // Name search (case-insensitive substring)
    if !term_lower.is_empty() && !product.name.to_lowercase().contains(term_lower) {
        return false;
    }

    // Category filter
    if !filter.selected_categories.is_empty()
        && !filter.selected_categories.contains(&product.category)
    {
        return false;
    }

    filter.price_range.contains(product.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PRODUCTS;

    fn names(indices: &[usize]) -> Vec<&'static str> {
        indices.iter().map(|&i| PRODUCTS[i].name).collect()
    }

    #[test]
    fn test_default_filter_returns_all() {
        let result = apply_filters(&PRODUCTS, &FilterState::default());
        assert_eq!(result, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let filter = FilterState {
            search_term: "PHONE".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&PRODUCTS, &filter)), ["Smartphone X"]);
    }

    #[test]
    fn test_category_and_price_combined() {
        let mut filter = FilterState {
            price_range: PriceRange::new(0, 700),
            ..Default::default()
        };
        filter.toggle_category(Category::Electronics);
        assert_eq!(
            names(&apply_filters(&PRODUCTS, &filter)),
            ["Smartphone X", "Wireless Earbuds"]
        );
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = FilterState {
            price_range: PriceRange::new(89, 129),
            ..Default::default()
        };
        assert_eq!(
            names(&apply_filters(&PRODUCTS, &filter)),
            ["Coffee Maker", "Running Shoes"]
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        let filter = FilterState {
            search_term: "laptop".to_string(),
            price_range: PriceRange::new(0, 500),
            ..Default::default()
        };
        assert!(apply_filters(&PRODUCTS, &filter).is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut filter = FilterState::default();
        filter.toggle_category(Category::Sports);
        let before = filter.selected_categories.clone();
        filter.toggle_category(Category::Furniture);
        filter.toggle_category(Category::Furniture);
        assert_eq!(filter.selected_categories, before);
        filter.toggle_category(Category::Sports);
        assert!(filter.selected_categories.is_empty());
    }

    #[test]
    fn test_price_range_new_orders_bounds() {
        let range = PriceRange::new(700, 100);
        assert_eq!((range.min(), range.max()), (100, 700));
    }

    #[test]
    fn test_price_range_setters_keep_order() {
        let mut range = PriceRange::new(200, 400);
        range.set_min(900);
        assert_eq!((range.min(), range.max()), (900, 900));
        range.set_max(50);
        assert_eq!((range.min(), range.max()), (50, 50));
        range.set_max(300);
        assert_eq!((range.min(), range.max()), (50, 300));
    }

    #[test]
    fn test_is_default_tracks_changes() {
        let mut filter = FilterState::default();
        assert!(filter.is_default());
        filter.search_term.push('x');
        assert!(!filter.is_default());
        filter.search_term.clear();
        filter.price_range.set_max(1_000);
        assert!(!filter.is_default());
    }

    #[test]
    fn test_describe_lists_active_filters_in_checkbox_order() {
        let mut filter = FilterState {
            price_range: PriceRange::new(0, 700),
            search_term: "pro".to_string(),
            ..Default::default()
        };
        filter.toggle_category(Category::Sports);
        filter.toggle_category(Category::Electronics);
        assert_eq!(
            filter.describe(),
            "$0-$700 \u{00b7} Electronics, Sports \u{00b7} \"pro\""
        );
    }
}
