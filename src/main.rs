// MarketView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Catalog validation and initial filter state
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use marketview::app;
pub use marketview::core;
pub use marketview::platform;
pub use marketview::ui;
pub use marketview::util;

use clap::Parser;
use crate::core::filter::{FilterState, PriceRange};
use crate::core::model::Category;
use util::constants::{PRICE_SLIDER_MAX, PRICE_SLIDER_MIN};

/// MarketView - browse the marketplace catalog.
///
/// Opens a window with a filter sidebar, a search header and a grid of
/// product cards. Options below set the initial filters.
#[derive(Parser, Debug)]
#[command(name = "MarketView", version, about)]
struct Cli {
    /// Initial search text.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Initially selected category (repeatable).
    #[arg(short = 'c', long = "category")]
    categories: Vec<String>,

    /// Initial lower price bound in dollars.
    #[arg(long = "min-price")]
    min_price: Option<u32>,

    /// Initial upper price bound in dollars.
    #[arg(long = "max-price")]
    max_price: Option<u32>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Build the starting filter state. Unknown category names are logged
    /// and skipped; prices are clamped into the slider bounds.
    fn initial_filters(&self) -> FilterState {
        let mut filter = FilterState::default();

        if let Some(ref term) = self.search {
            filter.search_term = term.clone();
        }

        for name in &self.categories {
            match name.parse::<Category>() {
                Ok(category) => {
                    filter.selected_categories.insert(category);
                }
                Err(e) => tracing::warn!(error = %e, "Ignoring --category"),
            }
        }

        let clamp = |v: u32| v.clamp(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX);
        filter.price_range = PriceRange::new(
            clamp(self.min_price.unwrap_or(PRICE_SLIDER_MIN)),
            clamp(self.max_price.unwrap_or(PRICE_SLIDER_MAX)),
        );

        filter
    }
}

/// Validate the built-in catalog before anything is shown.
fn check_catalog() -> util::error::Result<()> {
    crate::core::catalog::validate(&crate::core::catalog::PRODUCTS)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so that [logging] level can take effect;
    // its warnings are replayed once the subscriber is installed.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "MarketView starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Err(e) = check_catalog() {
        tracing::error!(error = %e, "Built-in catalog is invalid");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut state =
        app::state::AppState::new(&crate::core::catalog::PRODUCTS, &config, cli.debug);
    state.filter_state = cli.initial_filters();

    tracing::info!(
        products = state.products.len(),
        filters = %state.filter_state.describe(),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::MarketViewApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MarketView GUI: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_initial_page_state() {
        let cli = Cli::parse_from(["marketview"]);
        assert!(cli.initial_filters().is_default());
    }

    #[test]
    fn test_cli_builds_filters() {
        let cli = Cli::parse_from([
            "marketview",
            "--search",
            "pro",
            "-c",
            "electronics",
            "-c",
            "Garden",
            "--min-price",
            "2000",
            "--max-price",
            "100",
        ]);
        let filter = cli.initial_filters();
        assert_eq!(filter.search_term, "pro");
        assert_eq!(filter.selected_categories.len(), 1);
        assert!(filter.selected_categories.contains(&Category::Electronics));
        assert_eq!(filter.price_range, PriceRange::new(100, PRICE_SLIDER_MAX));
    }
}
