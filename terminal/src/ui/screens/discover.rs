//! # Discover Screen
//!
//! Searchable asset catalogue, market news and a learn placeholder.

use egui;

use crate::app::{App, AppState, DiscoverTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::{asset_card, tables};

/// Render discover screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Discover");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut query = state.discover.search_query.clone();
            let response = ui.add_sized(
                [220.0, 24.0],
                egui::TextEdit::singleline(&mut query).hint_text("Search assets..."),
            );
            if response.changed() {
                app.state.write().discover.search_query = query;
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in DiscoverTab::all() {
            let selected = state.discover.active_tab == *tab;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                app.state.write().discover.active_tab = *tab;
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    match state.discover.active_tab {
        DiscoverTab::AllAssets => render_assets(ui, state, &theme),
        DiscoverTab::News => render_news(ui, state, &theme),
        DiscoverTab::Learn => render_learn(ui, &theme),
    }
}

fn render_assets(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let assets = state.discover.filtered_assets();
    if assets.is_empty() {
        tables::render_empty_state(
            ui,
            "No assets match your search",
            Some("Try a different symbol or name"),
            theme,
        );
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("discover_assets")
        .show(ui, |ui| {
            for asset in assets {
                asset_card::render_asset_card(ui, asset, theme);
                ui.add_space(4.0);
            }
        });
}

fn render_news(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    if state.discover.news.is_empty() {
        tables::render_empty_state(ui, "No news available", None, theme);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("discover_news")
        .show(ui, |ui| {
            for item in &state.discover.news {
                ui.group(|ui| {
                    ui.label(egui::RichText::new(&item.title).strong());
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.selected, &item.source);
                        ui.colored_label(theme.dim, &item.date);
                    });
                    ui.label(&item.summary);
                });
                ui.add_space(4.0);
            }
        });
}

fn render_learn(ui: &mut egui::Ui, theme: &Theme) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Learn").strong());
        ui.colored_label(
            theme.dim,
            "Guides and tutorials are coming soon. Check back after the next release.",
        );
    });
}
