//! Message View Component
//!
//! Paints one conversation turn: the bubble, the SQL block, the results
//! table, the action row and the timestamp. Which of those appear is
//! decided by [`MessageTree::build`]; this module only draws the tree and
//! forwards the clicked action, if any, to the owner.

use eframe::egui::{self, RichText};

use crate::egui_app::theme::{colors, styles};
use crate::shared::actions::{dispatch, Action, MessageActions};
use crate::shared::config::AppConfig;
use crate::shared::message::Message;
use crate::shared::view::{
    ActionButton, Alignment, MessageTree, QueryBlock, ResultsTable, TextSize, TimeFormatter,
    WidthClass,
};

/// Render a message and forward at most one click to `actions`
pub fn render<A: MessageActions + ?Sized>(
    ui: &mut egui::Ui,
    message: &Message,
    config: &AppConfig,
    formatter: &dyn TimeFormatter,
    actions: &mut A,
) {
    let tree = MessageTree::build(message, formatter);

    if let Some(action) = paint(ui, &tree, &message.id, config) {
        dispatch(action, message, actions);
    }

    ui.add_space(16.0);
}

/// Draw the tree, returning the action whose button was clicked this frame
fn paint(ui: &mut egui::Ui, tree: &MessageTree, message_id: &str, config: &AppConfig) -> Option<Action> {
    let (outer_align, inner_align) = match tree.layout.alignment {
        Alignment::End => (egui::Align::Max, egui::Align::Max),
        Alignment::Center => (egui::Align::Center, egui::Align::Min),
    };
    let max_width = match tree.layout.width {
        WidthClass::Compact => config.compact_width,
        WidthClass::Wide => config.wide_width,
    }
    .min(ui.available_width());

    let mut clicked = None;

    ui.with_layout(egui::Layout::top_down(outer_align), |ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(max_width, 0.0),
            egui::Layout::top_down(inner_align),
            |ui| {
                ui.set_max_width(max_width);
                if tree.layout.width == WidthClass::Wide {
                    ui.set_min_width(max_width);
                }

                render_bubble(ui, tree);

                if let Some(query) = &tree.query {
                    ui.add_space(12.0);
                    render_query(ui, query, message_id);
                }

                if let Some(table) = &tree.results {
                    ui.add_space(12.0);
                    render_results(ui, table, message_id);
                }

                if let Some(buttons) = &tree.actions {
                    ui.add_space(16.0);
                    clicked = render_actions(ui, buttons);
                }

                ui.add_space(8.0);
                ui.label(RichText::new(&tree.timestamp).size(11.0).color(colors::TIMESTAMP));
            },
        );
    });

    clicked
}

fn render_bubble(ui: &mut egui::Ui, tree: &MessageTree) {
    let size = match tree.layout.text_size {
        TextSize::Small => 14.0,
        TextSize::Base => 16.0,
    };
    let text = RichText::new(&tree.content)
        .size(size)
        .color(styles::bubble_text_color(tree.bubble));

    let frame = styles::bubble_frame(tree.bubble);
    if tree.layout.width == WidthClass::Wide {
        frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.add(egui::Label::new(text).wrap());
        });
    } else {
        frame.show(ui, |ui| {
            ui.add(egui::Label::new(text).wrap());
        });
    }
}

fn render_query(ui: &mut egui::Ui, query: &QueryBlock, message_id: &str) {
    styles::panel_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            styles::panel_header_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("SQL Query").size(12.0).color(colors::TEXT_SECONDARY));
            });

            egui::Frame::new()
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    egui::ScrollArea::horizontal()
                        .id_salt(("sql_scroll", message_id))
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&query.sql)
                                        .monospace()
                                        .size(13.0)
                                        .color(colors::SQL_TEXT),
                                )
                                .extend(),
                            );
                        });
                });
        });
    });
}

fn render_results(ui: &mut egui::Ui, table: &ResultsTable, message_id: &str) {
    styles::panel_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            styles::panel_header_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(table.caption()).size(14.0).strong().color(colors::TEXT_LIGHT));
            });

            egui::ScrollArea::horizontal()
                .id_salt(("results_scroll", message_id))
                .show(ui, |ui| {
                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(16, 8))
                        .show(ui, |ui| {
                            egui::Grid::new(("results_grid", message_id))
                                .striped(true)
                                .spacing([32.0, 12.0])
                                .show(ui, |ui| {
                                    for column in &table.header {
                                        ui.label(
                                            RichText::new(column)
                                                .size(12.0)
                                                .strong()
                                                .color(colors::TEXT_SECONDARY),
                                        );
                                    }
                                    ui.end_row();

                                    for row in &table.rows {
                                        for cell in row {
                                            ui.add(
                                                egui::Label::new(
                                                    RichText::new(cell).size(13.0).color(colors::CELL_TEXT),
                                                )
                                                .extend(),
                                            );
                                        }
                                        ui.end_row();
                                    }
                                });
                        });
                });
        });
    });
}

fn render_actions(ui: &mut egui::Ui, buttons: &[ActionButton]) -> Option<Action> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        for button in buttons {
            let accent = accent_color(button);
            let (fill, stroke) = styles::action_button_colors(active_colors(button));
            let text = RichText::new(caption(button.action))
                .size(13.0)
                .color(accent);

            let response = ui
                .add(
                    egui::Button::new(text)
                        .fill(fill)
                        .stroke(stroke)
                        .corner_radius(egui::CornerRadius::same(8))
                        .min_size(egui::vec2(0.0, 32.0)),
                )
                .on_hover_text(button.action.tooltip());

            if response.clicked() {
                clicked = Some(button.action);
            }
        }
    });

    clicked
}

fn caption(action: Action) -> String {
    format!("{}  {}", icon(action), action.label())
}

fn icon(action: Action) -> &'static str {
    match action {
        Action::Like => "♥",
        Action::Dislike => "✖",
        Action::CopyCsv => "📋",
        Action::Retry => "🔄",
    }
}

fn active_colors(button: &ActionButton) -> Option<(egui::Color32, egui::Color32)> {
    match (button.action, button.active) {
        (Action::Like, true) => Some((colors::LIKE_ACTIVE_BG, colors::LIKE_ACTIVE_BORDER)),
        (Action::Dislike, true) => Some((colors::DISLIKE_ACTIVE_BG, colors::DISLIKE_ACTIVE_BORDER)),
        _ => None,
    }
}

fn accent_color(button: &ActionButton) -> egui::Color32 {
    match (button.action, button.active) {
        (Action::Like, true) => colors::TEXT_LIGHT,
        (Action::Dislike, true) => colors::DISLIKE_ACCENT,
        _ => colors::TEXT_SECONDARY,
    }
}
