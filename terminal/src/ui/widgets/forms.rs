//! # Form Components
//!
//! Reusable form elements for consistent UI across screens.

use egui;

use crate::ui::theme::Theme;
use crate::utils::validation::FieldErrors;

/// Render a labelled single-line text input.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(size, egui::TextEdit::singleline(value).hint_text(hint))
}

/// Render a labelled text input with its field error underneath, if any.
pub fn render_validated_input(
    ui: &mut egui::Ui,
    label: &str,
    field: &'static str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
    errors: &FieldErrors,
    theme: &Theme,
) -> egui::Response {
    let response = render_text_input(ui, label, value, hint, size);
    if let Some(message) = errors.get(field) {
        ui.colored_label(theme.error, message);
    }
    ui.add_space(6.0);
    response
}

/// Render a styled button.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(text);
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }
    ui.add(button)
}

/// Render a form heading.
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).heading().strong().color(theme.selected));
    ui.add_space(12.0);
}

/// Render an error banner.
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.colored_label(theme.error, error);
    ui.add_space(8.0);
}

/// Render a help/hint line.
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.colored_label(theme.dim, hint);
}
