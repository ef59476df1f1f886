/**
 * egui Native Desktop App - Main Entry Point
 *
 * Opens the query chat window and renders the configured conversation.
 */
use eframe::egui;
use querychat::egui_app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("querychat=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "QueryChat",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(QueryChatApp::default()))
        }),
    )
}

/// Main application state
#[derive(Default)]
struct QueryChatApp {
    state: AppState,
}

impl eframe::App for QueryChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &self.state);

        views::render_main_panel(ctx, &mut self.state);

        if let Some(csv) = self.state.messaging_state.take_clipboard() {
            ctx.copy_text(csv);
        }
    }
}
