//! Messaging Module
//!
//! The conversation column: state, the chat area and the per-message view.

pub mod state;
pub mod chat_area;
pub mod components;

pub use state::{Intent, IntentQueue, MessagingState};
pub use chat_area::render_chat_area;
