// MarketView - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the filter sidebar, the header and the product grid.
// The filtered product list is recomputed from scratch on every frame.

use crate::app::state::AppState;
use crate::ui;

/// The MarketView application.
pub struct MarketViewApp {
    pub state: AppState,
}

impl MarketViewApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for MarketViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let filters_before = self.state.filter_state.clone();

        // Ctrl+F / Cmd+F jumps to the search field.
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::F)) {
            self.state.focus_search = true;
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Sidebar").clicked() {
                        self.state.toggle_sidebar();
                        ui.close_menu();
                    }
                    let filters_active = !self.state.filter_state.is_default();
                    ui.add_enabled_ui(filters_active, |ui| {
                        if ui.button("Reset Filters").clicked() {
                            self.state.reset_filters();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui
                        .checkbox(&mut self.state.dark_mode, "Dark mode")
                        .changed()
                    {
                        ui::theme::apply(ctx, self.state.dark_mode, self.state.font_size);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let visible = self.state.visible_products();

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.debug_mode {
                    ui.label(egui::RichText::new(" DEBUG ").strong().weak());
                    ui.separator();
                }
                ui.label(self.state.filter_state.describe());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{}/{} products",
                        visible.len(),
                        self.state.products.len()
                    ));
                });
            });
        });

        // Left sidebar
        if self.state.sidebar_open {
            egui::SidePanel::left("sidebar")
                .default_width(ui::theme::SIDEBAR_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("sidebar_filters")
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            ui::panels::filters::render(ui, &mut self.state);
                        });
                });
        }

        // Central panel: header above the product grid
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::header::render(ui, &mut self.state);
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("product_grid")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui::panels::grid::render(ui, &visible, self.state.dark_mode);
                });
        });

        ui::panels::about::render(ctx, &mut self.state);

        // The grid above was drawn from the pre-edit list; draw again so the
        // change shows without waiting for the next input event.
        if self.state.filter_state != filters_before {
            ctx.request_repaint();
        }
    }
}
