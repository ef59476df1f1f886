//! egui Native Desktop App Module
//!
//! Desktop front end for the query chat: renders a conversation of user
//! questions and assistant answers (SQL, result tables, feedback buttons)
//! with egui/eframe.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── config.rs       - Environment-driven configuration
//! ├── state/          - Top-level app state
//! ├── views/          - Top bar and central panel
//! ├── messaging/      - Conversation state, chat area, message view
//! └── theme/          - Colors and frame builders
//! ```

pub mod config;
pub mod messaging;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use messaging::components::message_view;
pub use state::AppState;
