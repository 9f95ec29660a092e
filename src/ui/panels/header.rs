// MarketView - ui/panels/header.rs
//
// Page header: sidebar toggle on the left, search field on the right.
// Every keystroke updates the search term immediately (no debounce).

use crate::app::state::AppState;
use crate::util::constants::SEARCH_FIELD_WIDTH;

/// Render the header row.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button("\u{2630}")
            .on_hover_text("Toggle sidebar")
            .clicked()
        {
            state.toggle_sidebar();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let search_clicked = ui
                .add(egui::Button::new("\u{1f50d}").frame(false))
                .on_hover_text("Search")
                .clicked();

            let mut term = state.filter_state.search_term.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text("Search products...")
                    .desired_width(SEARCH_FIELD_WIDTH),
            );
            if response.changed() {
                state.set_search_term(term);
            }

            if search_clicked || state.focus_search {
                response.request_focus();
                state.focus_search = false;
            }
        });
    });
}
