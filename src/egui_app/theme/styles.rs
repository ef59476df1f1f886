//! Theme Styling Functions
//!
//! Frame builders for the message view and a global style for the window.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;
use crate::shared::view::BubbleStyle;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::MAIN_BG;
    style.visuals.panel_fill = colors::MAIN_BG;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_SECONDARY);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.hovered.weak_bg_fill = colors::PANEL_HEADER_BG;

    style.visuals.faint_bg_color = colors::PANEL_HEADER_BG;

    ctx.set_style(style);
}

/// Frame for the message bubble in one of its three treatments
pub fn bubble_frame(style: BubbleStyle) -> egui::Frame {
    let frame = egui::Frame::new()
        .corner_radius(CornerRadius::same(16))
        .shadow(subtle_shadow());

    match style {
        BubbleStyle::User => frame
            .fill(colors::BUBBLE_USER)
            .inner_margin(egui::Margin::symmetric(16, 10)),
        BubbleStyle::Error => frame
            .fill(colors::BUBBLE_ERROR)
            .stroke(Stroke::new(1.0, colors::BUBBLE_ERROR_BORDER))
            .inner_margin(egui::Margin::symmetric(24, 16)),
        BubbleStyle::Assistant => frame
            .fill(colors::BUBBLE_ASSISTANT)
            .stroke(Stroke::new(1.0, colors::BUBBLE_BORDER))
            .inner_margin(egui::Margin::symmetric(24, 16)),
    }
}

/// Body text color for a bubble treatment
pub fn bubble_text_color(style: BubbleStyle) -> Color32 {
    match style {
        BubbleStyle::Error => colors::ERROR_TEXT,
        BubbleStyle::User | BubbleStyle::Assistant => colors::TEXT_LIGHT,
    }
}

/// Outer frame for the SQL and results panels
pub fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.0, colors::BUBBLE_BORDER))
        .corner_radius(CornerRadius::same(8))
        .shadow(subtle_shadow())
}

/// Caption strip at the top of a panel
pub fn panel_header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_HEADER_BG)
        .inner_margin(egui::Margin::symmetric(16, 8))
}

/// Top bar frame
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Action button fill and border, pressed or not
pub fn action_button_colors(active_fill: Option<(Color32, Color32)>) -> (Color32, Stroke) {
    match active_fill {
        Some((fill, border)) => (fill, Stroke::new(1.0, border)),
        None => (colors::BUTTON_BG, Stroke::new(1.0, colors::BUTTON_BORDER)),
    }
}

fn subtle_shadow() -> egui::epaint::Shadow {
    egui::epaint::Shadow {
        offset: [0, 1],
        blur: 2,
        spread: 0,
        color: Color32::from_black_alpha(40),
    }
}
