//! Theme Module
//!
//! Colors and frame builders for the query chat window. Purely
//! presentational: nothing here decides what a message shows, only how the
//! decided sections look.
//!
//! # Usage
//!
//! ```rust,no_run
//! use eframe::egui;
//! use querychat::egui_app::theme::{colors, styles};
//! use querychat::shared::view::BubbleStyle;
//!
//! fn paint(ctx: &egui::Context, ui: &mut egui::Ui) {
//!     styles::apply_global_theme(ctx);
//!     styles::bubble_frame(BubbleStyle::User).show(ui, |ui| {
//!         ui.colored_label(colors::TEXT_LIGHT, "show sales");
//!     });
//! }
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
