//! Application configuration module
//!
//! View settings with validation. Environment handling lives in
//! `egui_app::config`.

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::shared::view::DEFAULT_TIME_FORMAT;

/// Default max width of a user bubble, in points
pub const DEFAULT_COMPACT_WIDTH: f32 = 576.0;

/// Default max width of an assistant turn, in points
pub const DEFAULT_WIDE_WIDTH: f32 = 1200.0;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// strftime pattern for the time-of-day label
    pub time_format: String,
    /// Max width for user turns
    pub compact_width: f32,
    /// Max width for assistant turns
    pub wide_width: f32,
    /// Conversation file to load at startup
    pub conversation_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            compact_width: DEFAULT_COMPACT_WIDTH,
            wide_width: DEFAULT_WIDE_WIDTH,
            conversation_path: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(self.time_format.clone()));
        }
        for (name, width) in [("compact_width", self.compact_width), ("wide_width", self.wide_width)] {
            if !(width.is_finite() && width > 0.0) {
                return Err(ConfigError::InvalidWidth(name, width));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    time_format: Option<String>,
    compact_width: Option<f32>,
    wide_width: Option<f32>,
    conversation_path: Option<String>,
}

impl AppConfigBuilder {
    pub fn time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = Some(pattern.into());
        self
    }

    pub fn compact_width(mut self, width: f32) -> Self {
        self.compact_width = Some(width);
        self
    }

    pub fn wide_width(mut self, width: f32) -> Self {
        self.wide_width = Some(width);
        self
    }

    pub fn conversation_path(mut self, path: impl Into<String>) -> Self {
        self.conversation_path = Some(path.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            time_format: self.time_format.unwrap_or(defaults.time_format),
            compact_width: self.compact_width.unwrap_or(defaults.compact_width),
            wide_width: self.wide_width.unwrap_or(defaults.wide_width),
            conversation_path: self.conversation_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("invalid {0}: {1}")]
    InvalidWidth(&'static str, f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.time_format, "%-I:%M:%S %p");
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .time_format("%H:%M")
            .compact_width(400.0)
            .conversation_path("chat.json")
            .build()
            .unwrap();
        assert_eq!(config.time_format, "%H:%M");
        assert_eq!(config.compact_width, 400.0);
        assert_eq!(config.wide_width, DEFAULT_WIDE_WIDTH);
        assert_eq!(config.conversation_path.as_deref(), Some("chat.json"));
    }

    #[test]
    fn test_rejects_bad_time_format() {
        let err = AppConfig::builder().time_format("%Q").build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeFormat("%Q".to_string()));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let err = AppConfig::builder().wide_width(0.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidWidth("wide_width", 0.0));
    }
}
