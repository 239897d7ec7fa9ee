//! # Navigation Bar
//!
//! Top navigation bar with arrows, one button per screen and the current
//! screen highlighted.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(32.0);

        // Navigation arrows at far left
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 0.0);
        if ui.button("<").clicked() {
            app.previous_screen();
        }
        if ui.button(">").clicked() {
            app.next_screen();
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new("VANTAGE").strong().color(theme.selected));
        ui.add_space(12.0);

        for screen in Screen::all() {
            let selected = state.current_screen == *screen;
            let label = if selected {
                egui::RichText::new(screen.title()).strong().color(theme.selected)
            } else {
                egui::RichText::new(screen.title())
            };
            if ui.selectable_label(selected, label).clicked() {
                app.handle_screen_change(*screen);
            }
        }
    });
}
