//! # Vantage Terminal Entry Point
//!
//! Initializes logging, enters the shared tokio runtime so spawned tasks
//! have an executor, and runs the eframe event loop.

use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terminal::app::App;
use terminal::ui;
use terminal::ui::theme::ThemeConfig;
use terminal::ui::widgets::notifications::NotificationManager;
use terminal::utils::runtime::TOKIO_RT;

struct VantageApp {
    app: App,
    notifications: NotificationManager,
}

impl VantageApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optional user palette override next to the binary
        let theme_config = ThemeConfig::load_from_file(std::path::Path::new("theme.json"))
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "failed to load theme.json, using default palette");
                ThemeConfig::default()
            });
        cc.egui_ctx
            .set_visuals(terminal::ui::theme::Theme::visuals_from_config(&theme_config));
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for VantageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain completed background work before drawing the frame.
        self.app.on_tick();

        ui::render(ctx, &mut self.app, &mut self.notifications);
        self.notifications.show(ctx);

        // Background tasks finish without user input, so keep polling.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn main() -> eframe::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("terminal=info,warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    // Keep a runtime guard alive for the whole UI session so tokio::spawn
    // works from the eframe thread.
    let _runtime_guard = TOKIO_RT.enter();

    tracing::info!("starting vantage terminal");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1366.0, 768.0])
            .with_min_inner_size([1024.0, 640.0])
            .with_title("Vantage"),
        ..Default::default()
    };

    eframe::run_native(
        "Vantage",
        options,
        Box::new(|cc| Ok(Box::new(VantageApp::new(cc)))),
    )
}
