//! Shared Module
//!
//! Types and logic that do not depend on the UI toolkit: the message record,
//! the view tree built from it, the action seam, and the collaborators that
//! act on clicks (CSV export, configuration, errors).

/// Message record
pub mod message;

/// Action buttons and the callback seam
pub mod actions;

/// Toolkit-independent view tree
pub mod view;

/// Result set export for copy-CSV
pub mod csv_export;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use actions::{dispatch, Action, Callbacks, MessageActions};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use message::{Message, Role, Row};
pub use view::{MessageTree, TimeFormatter};
