//! QueryChat - Main Library
//!
//! Rendering of a conversational analytics chat: each turn shows its text
//! and, for assistant answers, the generated SQL, the tabular result and a
//! row of feedback controls (like, dislike, copy CSV, retry).
//!
//! # Module Structure
//!
//! - **`shared`** - Toolkit-independent pieces
//!   - The `Message` record and its JSON form
//!   - `MessageTree`, the view tree with every visibility decision made
//!   - The `MessageActions` callback seam and `dispatch`
//!   - CSV export, configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - `message_view::render`, the message component
//!   - Conversation state that turns clicks into updated records
//!
//! # Usage
//!
//! ```rust
//! use querychat::shared::message::Message;
//! use querychat::shared::view::{MessageTree, UtcTimeFormatter};
//!
//! let message = Message::user("show sales");
//! let tree = MessageTree::build(&message, &UtcTimeFormatter::default());
//! assert!(tree.actions.is_none());
//! assert!(tree.query.is_none());
//! ```
//!
//! # Thread Safety
//!
//! egui is single-threaded immediate mode; building and painting a message
//! happens on the UI thread every frame and performs no I/O.

/// Shared types and view logic
pub mod shared;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
