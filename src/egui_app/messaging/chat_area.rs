//! Chat Area Component
//!
//! Scrollable column of message views for the whole conversation.

use eframe::egui;
use super::components::message_view;
use super::state::{IntentQueue, MessagingState};
use crate::egui_app::theme::colors;
use crate::shared::config::AppConfig;
use crate::shared::view::TimeFormatter;

/// Render the chat area and apply the clicks made in it
pub fn render_chat_area(
    ui: &mut egui::Ui,
    state: &mut MessagingState,
    config: &AppConfig,
    formatter: &dyn TimeFormatter,
) {
    // Show any transient UI error banner
    if let Some(err) = state.ui_error.clone() {
        ui.add_space(6.0);
        egui::Frame::new()
            .fill(colors::BANNER_BG)
            .stroke(egui::Stroke::new(1.0, colors::BUBBLE_ERROR_BORDER))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::ERROR_TEXT, err);
                    if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                        state.ui_error = None;
                    }
                });
            });
        ui.add_space(6.0);
    }

    if state.messages.is_empty() {
        render_empty_state(ui);
        return;
    }

    let mut queue = IntentQueue::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(16.0);
            for message in &state.messages {
                message_view::render(ui, message, config, formatter, &mut queue);
            }
            ui.add_space(16.0);
        });

    if !queue.is_empty() {
        state.apply_all(&mut queue);
    }
}

/// Render empty state when no messages
fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::TEXT_SECONDARY, "No messages yet");
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Ask a question about your data to get started");
    });
}
