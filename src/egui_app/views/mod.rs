use eframe::egui;

use crate::egui_app::messaging::render_chat_area;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("QueryChat").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    let messaging = &state.messaging_state;
                    let retries = messaging.pending_retries.len();
                    if retries > 0 {
                        ui.colored_label(
                            egui::Color32::from_rgb(255, 193, 7),
                            format!("🔄 {} pending", retries),
                        );
                        ui.add_space(16.0);
                    }
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("♥ {}   ✖ {}", messaging.liked_count(), messaging.disliked_count()),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::MAIN_BG)
        .inner_margin(egui::Margin::symmetric(24, 0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| {
            render_chat_area(
                ui,
                &mut state.messaging_state,
                state.config.app(),
                &state.formatter,
            );
        });
}
