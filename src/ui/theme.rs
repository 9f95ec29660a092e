// MarketView - ui/theme.rs
//
// Colour scheme, responsive grid breakpoints, and layout constants.
// No dependencies on app state or business logic.

use crate::util::constants::{GRID_BREAKPOINT_LG, GRID_BREAKPOINT_MD};
use egui::Color32;

/// Number of product-card columns for a given available width.
pub fn grid_columns(available_width: f32) -> usize {
    if available_width >= GRID_BREAKPOINT_LG {
        3
    } else if available_width >= GRID_BREAKPOINT_MD {
        2
    } else {
        1
    }
}

/// Apply dark/light visuals and the body font size to the context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * HEADING_SCALE,
                egui::TextStyle::Small => font_size * SMALL_SCALE,
                _ => font_size,
            };
        }
    });
}

/// Muted colour for the category line on a card.
pub fn muted_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(156, 163, 175) // Gray 400
    } else {
        Color32::from_rgb(107, 114, 128) // Gray 500
    }
}

/// Price label colour.
pub const PRICE_COLOUR: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Heading sizes relative to the body font.
const HEADING_SCALE: f32 = 1.4;
const SMALL_SCALE: f32 = 0.8;

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const GRID_GAP: f32 = 24.0;
pub const CARD_MIN_HEIGHT: f32 = 120.0;
pub const CARD_MARGIN: i8 = 12;
pub const PAGE_PADDING: f32 = 24.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(grid_columns(320.0), 1);
        assert_eq!(grid_columns(767.0), 1);
        assert_eq!(grid_columns(768.0), 2);
        assert_eq!(grid_columns(1023.0), 2);
        assert_eq!(grid_columns(1024.0), 3);
        assert_eq!(grid_columns(2560.0), 3);
    }
}
