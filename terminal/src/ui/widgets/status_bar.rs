//! # Status Bar Widget
//!
//! Bottom status line: selected pair, mid price and verification status.

use egui;

use crate::app::AppState;
use crate::kyc::KycStep;
use crate::ui::theme::Theme;

/// Render status bar at the bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(format!("Pair: {}", state.market.selected_pair));
        ui.separator();

        if let Some(mid) = state.market.order_book.mid_price() {
            ui.label(format!("Mid: {}", shared::utils::format_usd(mid)));
            ui.separator();
        }

        let (label, color) = match state.account.kyc.wizard.current_step {
            KycStep::Verified => ("Verified", theme.success),
            KycStep::Pending => ("Verification pending", theme.warning),
            KycStep::Rejected => ("Verification rejected", theme.error),
            _ => ("Unverified", theme.dim),
        };
        ui.colored_label(color, label);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, "demo data");
        });
    });
}
