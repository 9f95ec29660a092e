// MarketView - app/state.rs
//
// Page-level state container. Holds the catalog reference, the filter
// state and the window-chrome flags. Owned by the eframe::App implementation.
//
// The filtered product list is derived on demand from the filter state and
// the catalog; it is never stored.

use crate::core::filter::{self, FilterState};
use crate::core::model::{Category, Product};
use crate::platform::config::AppConfig;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The static product catalog.
    pub products: &'static [Product],

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Whether the filter sidebar is expanded.
    pub sidebar_open: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Set by the header search button; consumed by the search field on
    /// the next frame.
    pub focus_search: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state over `products`, seeded from the validated config.
    pub fn new(products: &'static [Product], config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            products,
            filter_state: FilterState::default(),
            sidebar_open: config.sidebar_open,
            show_about: false,
            focus_search: false,
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Products matching the current filter state, in catalog order.
    pub fn visible_products(&self) -> Vec<&'static Product> {
        let products = self.products;
        filter::apply_filters(products, &self.filter_state)
            .into_iter()
            .filter_map(|idx| products.get(idx))
            .collect()
    }

    /// Toggle one category in the selection.
    pub fn toggle_category(&mut self, category: Category) {
        self.filter_state.toggle_category(category);
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter_state.search_term = term.into();
        tracing::debug!(term = %self.filter_state.search_term, "Search term changed");
    }

    /// Restore the initial filter state. Chrome flags are left untouched.
    pub fn reset_filters(&mut self) {
        self.filter_state = FilterState::default();
        tracing::debug!("Filters reset");
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PRODUCTS;
    use crate::core::filter::PriceRange;

    fn state() -> AppState {
        AppState::new(&PRODUCTS, &AppConfig::default(), false)
    }

    fn visible_names(state: &AppState) -> Vec<&'static str> {
        state.visible_products().iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = state();
        assert_eq!(state.visible_products().len(), PRODUCTS.len());
        assert!(state.sidebar_open);
    }

    #[test]
    fn test_visible_products_follow_state_changes() {
        let mut state = state();
        state.set_search_term("phone");
        assert_eq!(visible_names(&state), ["Smartphone X"]);
        state.set_search_term("");
        state.toggle_category(Category::Furniture);
        assert_eq!(visible_names(&state), ["Ergonomic Chair"]);
    }

    #[test]
    fn test_updates_commute() {
        let mut a = state();
        a.set_search_term("e");
        a.toggle_category(Category::Electronics);
        a.filter_state.price_range = PriceRange::new(100, 700);

        let mut b = state();
        b.filter_state.price_range = PriceRange::new(100, 700);
        b.toggle_category(Category::Electronics);
        b.set_search_term("e");

        assert_eq!(a.filter_state, b.filter_state);
        assert_eq!(visible_names(&a), visible_names(&b));
    }

    #[test]
    fn test_reset_keeps_sidebar_flag() {
        let mut state = state();
        state.toggle_sidebar();
        state.toggle_category(Category::Sports);
        state.reset_filters();
        assert!(state.filter_state.is_default());
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_state_seeded_from_config() {
        let config = AppConfig {
            dark_mode: false,
            sidebar_open: false,
            font_size: 12.0,
            ..AppConfig::default()
        };
        let state = AppState::new(&PRODUCTS, &config, true);
        assert!(!state.dark_mode);
        assert!(!state.sidebar_open);
        assert_eq!(state.font_size, 12.0);
        assert!(state.debug_mode);
    }
}
