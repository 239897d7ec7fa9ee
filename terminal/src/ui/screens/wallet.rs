//! # Wallet Screen
//!
//! Asset balances and transaction history.

use egui;
use egui_extras::{Column, TableBuilder};
use shared::utils::{format_number, format_usd};

use crate::app::{App, AppState, WalletTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables;

/// Render wallet screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Wallet");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_usd(state.wallet.total_usd()))
                    .heading()
                    .color(theme.selected),
            );
            ui.colored_label(theme.dim, "Total value:");
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in WalletTab::all() {
            let selected = state.wallet.active_tab == *tab;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                app.state.write().wallet.active_tab = *tab;
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match state.wallet.active_tab {
        WalletTab::Assets => render_balances(ui, state, &theme),
        WalletTab::History => render_transactions(ui, state, &theme),
    }
}

fn render_balances(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    if state.wallet.balances.is_empty() {
        tables::render_empty_state(ui, "No assets in this wallet", None, theme);
        return;
    }

    TableBuilder::new(ui)
        .id_salt("wallet_balances")
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Asset", "Name", "Amount", "Value"] {
                header.col(|ui| {
                    ui.colored_label(theme.selected, title);
                });
            }
        })
        .body(|mut body| {
            for balance in &state.wallet.balances {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&balance.symbol).strong());
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.dim, &balance.name);
                    });
                    row.col(|ui| {
                        ui.monospace(format_number(balance.amount, 4));
                    });
                    row.col(|ui| {
                        ui.monospace(format_usd(balance.usd_value));
                    });
                });
            }
        });
}

fn render_transactions(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    if state.wallet.transactions.is_empty() {
        tables::render_empty_state(ui, "No transactions yet", None, theme);
        return;
    }

    TableBuilder::new(ui)
        .id_salt("wallet_transactions")
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Date", "Type", "Asset", "Amount", "Status", "Details"] {
                header.col(|ui| {
                    ui.colored_label(theme.selected, title);
                });
            }
        })
        .body(|mut body| {
            for tx in &state.wallet.transactions {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.colored_label(theme.dim, &tx.date);
                    });
                    row.col(|ui| {
                        ui.label(&tx.tx_type);
                    });
                    row.col(|ui| {
                        ui.label(&tx.asset);
                    });
                    row.col(|ui| {
                        let color = if tx.amount < 0.0 {
                            theme.price_down
                        } else {
                            theme.price_up
                        };
                        ui.colored_label(color, format_number(tx.amount, 4));
                    });
                    row.col(|ui| {
                        let color = match tx.status.as_str() {
                            "Completed" => theme.success,
                            "Pending" => theme.warning,
                            _ => theme.error,
                        };
                        ui.colored_label(color, &tx.status);
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.dim, &tx.details);
                    });
                });
            }
        });
}
