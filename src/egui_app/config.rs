use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// strftime pattern for the timestamp label
const TIME_FORMAT_VAR: &str = "QUERYCHAT_TIME_FORMAT";

/// Conversation JSON file to open at startup
const CONVERSATION_VAR: &str = "QUERYCHAT_CONVERSATION";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(
            std::env::var(TIME_FORMAT_VAR).ok(),
            std::env::var(CONVERSATION_VAR).ok(),
        )
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Build from raw variable values. An invalid time format is dropped
    /// with a warning rather than failing startup.
    fn from_vars(time_format: Option<String>, conversation: Option<String>) -> Self {
        let conversation = conversation.filter(|p| !p.trim().is_empty());

        let mut builder = AppConfig::builder();
        if let Some(path) = conversation.clone() {
            builder = builder.conversation_path(path);
        }
        if let Some(pattern) = time_format {
            builder = builder.time_format(pattern);
        }

        let app = match builder.build() {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", TIME_FORMAT_VAR, e);
                AppConfig {
                    conversation_path: conversation,
                    ..AppConfig::default()
                }
            }
        };
        Self { app }
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn time_format(&self) -> &str {
        &self.app.time_format
    }

    pub fn conversation_path(&self) -> Option<&str> {
        self.app.conversation_path.as_deref()
    }
}
