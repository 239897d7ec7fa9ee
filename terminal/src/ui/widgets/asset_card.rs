//! # Asset Card Widget
//!
//! Card row for a single asset: symbol, name, price and 24h change.

use egui;
use shared::dto::market::AssetInfo;
use shared::utils::{format_number, format_usd};

use crate::ui::theme::Theme;

/// Render an asset card
pub fn render_asset_card(ui: &mut egui::Ui, asset: &AssetInfo, theme: &Theme) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&asset.symbol).strong());
            ui.colored_label(theme.dim, &asset.name);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (change_text, change_color) = theme.format_price_change(asset.change_24h);
                ui.colored_label(change_color, change_text);
                ui.monospace(format_usd(asset.price));
            });
        });

        ui.horizontal(|ui| {
            ui.colored_label(
                theme.dim,
                format!("Mkt cap {}", format_usd(asset.market_cap)),
            );
            for tag in &asset.tags {
                ui.small(format!("[{}]", tag));
            }
        });
    });
}

/// Render a compact holding row: amount plus USD value.
pub fn render_holding_row(
    ui: &mut egui::Ui,
    symbol: &str,
    amount: f64,
    usd_value: f64,
    theme: &Theme,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(symbol).strong());
        ui.monospace(format_number(amount, 4));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, format_usd(usd_value));
        });
    });
}
