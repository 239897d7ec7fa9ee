//! # UI Layer
//!
//! Immediate-mode rendering on top of the shared application state. Every
//! frame takes a cloned snapshot of [`AppState`] so widgets never hold the
//! lock while drawing, then routes user input back through [`App`] handlers.
//!
//! ```text
//! AppState snapshot ──> screens::render ──> App::handle_* ──> state mutation
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Screen};
use widgets::notifications::NotificationManager;

/// Render one frame of the terminal.
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Snapshot under a short read lock. A writer holding the lock just
    // means we draw the previous frame's state.
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    // Hand queued handler notifications to the toast widget.
    if !state.pending_notifications.is_empty() {
        let pending = {
            let mut guard = app.state.write();
            std::mem::take(&mut guard.pending_notifications)
        };
        for (level, message) in pending {
            notifications.push(&level, message);
        }
    }

    // Keyboard screen cycling, Tab forward and Shift+Tab back.
    let (tab_pressed, shift_held) = ctx.input(|input| {
        (
            input.key_pressed(egui::Key::Tab),
            input.modifiers.shift,
        )
    });
    if tab_pressed && !ctx.wants_keyboard_input() {
        if shift_held {
            app.previous_screen();
        } else {
            app.next_screen();
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
        ui.separator();
        ui.add_space(6.0);

        let bottom_height = 28.0;
        egui::ScrollArea::vertical()
            .id_salt("screen_body")
            .max_height(ui.available_height() - bottom_height)
            .show(ui, |ui| match state.current_screen {
                Screen::Dashboard => screens::dashboard::render(ui, &state, app),
                Screen::Trade => screens::trade::render(ui, &state, app),
                Screen::Wallet => screens::wallet::render(ui, &state, app),
                Screen::Discover => screens::discover::render(ui, &state, app),
                Screen::Account => screens::account::render(ui, &state, app),
            });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            widgets::status_bar::render_status_bar(ui, &state);
            ui.separator();
        });
    });
}
