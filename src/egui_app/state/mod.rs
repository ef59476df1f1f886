use crate::egui_app::Config;
use crate::egui_app::messaging::MessagingState;
use crate::shared::view::LocalTimeFormatter;

/// Conversation shown when no file is configured or the file fails to load
const DEMO_CONVERSATION: &str = include_str!("../assets/demo_conversation.json");

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub formatter: LocalTimeFormatter,
    pub messaging_state: MessagingState,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let messaging_state = load_conversation(config.conversation_path());
        let formatter = LocalTimeFormatter::new(config.time_format());
        tracing::info!("AppState initialized with {} messages", messaging_state.messages.len());

        Self {
            config,
            formatter,
            messaging_state,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_conversation(path: Option<&str>) -> MessagingState {
    if let Some(path) = path {
        match MessagingState::load(path) {
            Ok(state) => return state,
            Err(e) => tracing::warn!("Falling back to demo conversation: {}", e),
        }
    }
    demo_conversation()
}

/// The bundled sample conversation
pub fn demo_conversation() -> MessagingState {
    match MessagingState::from_json(DEMO_CONVERSATION) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Bundled demo conversation is invalid: {}", e);
            MessagingState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_conversation_parses() {
        let state = demo_conversation();
        assert_eq!(state.messages.len(), 6);
        assert!(state.ui_error.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_demo() {
        let state = load_conversation(Some("/nonexistent/querychat/conversation.json"));
        assert_eq!(state.messages.len(), 6);
    }
}
