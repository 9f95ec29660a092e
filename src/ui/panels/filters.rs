// MarketView - ui/panels/filters.rs
//
// Filter controls sidebar: price range and category checkboxes.
// Holds no state of its own; every change is written straight back into
// the page state and picked up by the next frame's filtering pass.

use crate::app::state::AppState;
use crate::core::model::Category;
use crate::util::constants::{PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP};

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();
    ui.add_space(8.0);

    render_price_range(ui, state);

    ui.add_space(16.0);

    ui.strong("Categories");
    ui.add_space(4.0);
    for category in Category::all() {
        let mut checked = state.filter_state.selected_categories.contains(category);
        if ui.checkbox(&mut checked, category.label()).changed() {
            state.toggle_category(*category);
        }
    }

    ui.add_space(16.0);
    ui.separator();

    let is_default = state.filter_state.is_default();
    if ui
        .add_enabled(!is_default, egui::Button::new("Reset filters"))
        .clicked()
    {
        state.reset_filters();
    }
}

/// Two sliders over the same bounds. Moving one thumb past the other drags
/// it along, so the range stays ordered.
fn render_price_range(ui: &mut egui::Ui, state: &mut AppState) {
    ui.strong("Price range");
    ui.add_space(4.0);

    let bounds = PRICE_SLIDER_MIN..=PRICE_SLIDER_MAX;
    let step = f64::from(PRICE_SLIDER_STEP);
    let range = &mut state.filter_state.price_range;

    let mut lo = range.min();
    let lo_response = ui.add(
        egui::Slider::new(&mut lo, bounds.clone())
            .step_by(step)
            .show_value(false)
            .text("Min"),
    );
    if lo_response.changed() {
        range.set_min(lo);
    }

    let mut hi = range.max();
    let hi_response = ui.add(
        egui::Slider::new(&mut hi, bounds)
            .step_by(step)
            .show_value(false)
            .text("Max"),
    );
    if hi_response.changed() {
        range.set_max(hi);
    }

    if lo_response.changed() || hi_response.changed() {
        tracing::debug!(min = range.min(), max = range.max(), "Price range changed");
    }

    ui.horizontal(|ui| {
        ui.label(format!("${}", range.min()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("${}", range.max()));
        });
    });
}
