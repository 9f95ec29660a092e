// MarketView - ui/panels/grid.rs
//
// Responsive product card grid (central area).
// Receives the already-filtered product list; draws one card per product
// in rows of 1, 2 or 3 columns depending on the available width.

use crate::core::model::Product;
use crate::ui::theme;

/// Render the "Products" heading and the card grid.
pub fn render(ui: &mut egui::Ui, products: &[&Product], dark_mode: bool) {
    ui.add_space(theme::PAGE_PADDING / 2.0);
    ui.heading(egui::RichText::new("Products").strong());
    ui.add_space(theme::PAGE_PADDING / 2.0);

    if products.is_empty() {
        ui.label(egui::RichText::new("No products match the current filters.").weak());
        return;
    }

    let columns = theme::grid_columns(ui.available_width());
    let gap = theme::GRID_GAP;
    // Frame::group adds inner margin and a 1px stroke on both sides.
    let slot = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;
    let card_width = (slot - 2.0 * (f32::from(theme::CARD_MARGIN) + 1.0)).max(0.0);

    for row in products.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for product in row {
                render_card(ui, product, card_width, dark_mode);
            }
        });
        ui.add_space(gap);
    }
}

/// A single product card: title, category, then price and cart button.
fn render_card(ui: &mut egui::Ui, product: &Product, width: f32, dark_mode: bool) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(theme::CARD_MARGIN))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.set_min_height(theme::CARD_MIN_HEIGHT);

            ui.label(egui::RichText::new(product.name).heading().strong());
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(product.category.label())
                    .color(theme::muted_text_colour(dark_mode)),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("${}", product.price))
                        .size(18.0)
                        .strong()
                        .color(theme::PRICE_COLOUR),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add to cart").clicked() {
                        tracing::info!(
                            product_id = product.id,
                            product = product.name,
                            "Add to cart clicked"
                        );
                    }
                });
            });
        });
}
