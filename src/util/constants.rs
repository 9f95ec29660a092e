// MarketView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MarketView";

/// Application identifier used for config directories.
pub const APP_ID: &str = "MarketView";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Price filter
// =============================================================================

/// Lower bound of the price slider (whole dollars).
pub const PRICE_SLIDER_MIN: u32 = 0;

/// Upper bound of the price slider (whole dollars).
///
/// Every catalog price must fall inside the slider bounds, otherwise the
/// product could never be shown with the default range.
pub const PRICE_SLIDER_MAX: u32 = 1_500;

/// Slider step in dollars.
pub const PRICE_SLIDER_STEP: u32 = 10;

// =============================================================================
// Layout
// =============================================================================

/// Width at which the product grid switches from one to two columns.
pub const GRID_BREAKPOINT_MD: f32 = 768.0;

/// Width at which the product grid switches from two to three columns.
pub const GRID_BREAKPOINT_LG: f32 = 1_024.0;

/// Width of the search field in the header.
pub const SEARCH_FIELD_WIDTH: f32 = 256.0;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
