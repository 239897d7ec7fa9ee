//! # Dashboard Screen
//!
//! Portfolio overview: value cards, monthly performance bar chart, key
//! holdings and market news.

use egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::utils::format_usd;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{asset_card, forms};

/// Render dashboard screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    forms::render_form_heading(ui, "Portfolio Overview", &theme);

    // Value cards
    ui.horizontal(|ui| {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "Total Value");
                ui.heading(format_usd(state.dashboard.total_value()));
            });
        });
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "24h P/L");
                let pnl = state.dashboard.pnl_24h;
                let text = if pnl >= 0.0 {
                    format!("+{}", format_usd(pnl))
                } else {
                    format_usd(pnl)
                };
                ui.heading(
                    egui::RichText::new(text).color(theme.price_change_color(pnl)),
                );
            });
        });
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.colored_label(theme.dim, "Open Orders");
                ui.heading(state.market.open_orders.len().to_string());
            });
        });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        // Left: monthly performance bar chart
        columns[0].group(|ui| {
            ui.label(egui::RichText::new("Monthly Performance").strong());
            let bars: Vec<Bar> = state
                .dashboard
                .monthly_performance
                .iter()
                .enumerate()
                .map(|(idx, (_, value))| {
                    Bar::new(idx as f64, *value).width(0.6).fill(theme.selected)
                })
                .collect();
            Plot::new("monthly_performance")
                .height(180.0)
                .show_axes([false, true])
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Portfolio value", bars));
                });
            ui.horizontal(|ui| {
                for (month, _) in &state.dashboard.monthly_performance {
                    ui.colored_label(theme.dim, month);
                }
            });
        });

        // Right: key holdings
        columns[1].group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Key Assets").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Wallet").clicked() {
                        app.handle_screen_change(Screen::Wallet);
                    }
                });
            });
            ui.add_space(6.0);
            for holding in &state.dashboard.portfolio {
                asset_card::render_holding_row(
                    ui,
                    &holding.symbol,
                    holding.amount,
                    holding.usd_value,
                    &theme,
                );
            }
        });
    });

    ui.add_space(12.0);

    // Watchlist and news
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(egui::RichText::new("Watchlist").strong());
            ui.add_space(6.0);
            for asset in state.discover.assets.iter().take(4) {
                asset_card::render_asset_card(ui, asset, &theme);
            }
        });

        columns[1].group(|ui| {
            ui.label(egui::RichText::new("Market News").strong());
            ui.add_space(6.0);
            for item in &state.discover.news {
                ui.label(egui::RichText::new(&item.title).strong());
                ui.colored_label(theme.dim, format!("{} - {}", item.source, item.date));
                ui.label(&item.summary);
                ui.add_space(8.0);
            }
        });
    });
}
