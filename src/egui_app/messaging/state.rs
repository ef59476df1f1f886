//! Messaging State
//!
//! Owner of the conversation shown in the window. Message views forward
//! clicks here as [`Intent`]s; applying an intent produces the updated
//! records the views pick up on the next frame.

use std::collections::HashSet;
use std::path::Path;

use crate::shared::actions::MessageActions;
use crate::shared::csv_export;
use crate::shared::error::SharedError;
use crate::shared::message::Message;

/// A click forwarded by a message view, queued until the frame's views are done
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Like(String),
    Dislike(String),
    CopyCsv(Message),
    Retry(String),
}

/// Collects intents during rendering so the conversation can be borrowed
/// immutably while it is drawn
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.intents.drain(..)
    }
}

impl MessageActions for IntentQueue {
    fn on_like(&mut self, id: &str) {
        self.intents.push(Intent::Like(id.to_string()));
    }

    fn on_dislike(&mut self, id: &str) {
        self.intents.push(Intent::Dislike(id.to_string()));
    }

    fn on_copy_csv(&mut self, message: &Message) {
        self.intents.push(Intent::CopyCsv(message.clone()));
    }

    fn on_retry(&mut self, id: &str) {
        self.intents.push(Intent::Retry(id.to_string()));
    }
}

/// The main state for the conversation UI
#[derive(Debug, Default)]
pub struct MessagingState {
    /// Turns in display order
    pub messages: Vec<Message>,
    /// Assistant turns the user asked to regenerate, oldest first
    pub pending_retries: Vec<String>,
    /// CSV waiting to be placed on the system clipboard
    pub clipboard: Option<String>,
    /// Transient UI error to show to the user (e.g., failed export)
    pub ui_error: Option<String>,
}

impl MessagingState {
    pub fn new(messages: Vec<Message>) -> Result<Self, SharedError> {
        ensure_unique_ids(&messages)?;
        Ok(Self {
            messages,
            ..Self::default()
        })
    }

    /// Parse a conversation from a JSON array of messages
    pub fn from_json(json: &str) -> Result<Self, SharedError> {
        let messages: Vec<Message> = serde_json::from_str(json)?;
        Self::new(messages)
    }

    /// Read and parse a conversation file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SharedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SharedError::io(path.display().to_string(), e.to_string()))?;
        let state = Self::from_json(&json)?;
        tracing::info!("Loaded {} messages from {}", state.messages.len(), path.display());
        Ok(state)
    }

    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    fn message_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// Apply every queued intent in click order
    pub fn apply_all(&mut self, queue: &mut IntentQueue) {
        for intent in queue.drain() {
            self.apply(intent);
        }
    }

    /// Apply one intent, replacing the affected record
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Like(id) => match self.message_mut(&id) {
                Some(message) => {
                    message.liked = !message.liked;
                    tracing::info!("Message {} liked={}", id, message.liked);
                }
                None => tracing::warn!("Like for unknown message {}", id),
            },
            Intent::Dislike(id) => match self.message_mut(&id) {
                Some(message) => {
                    message.disliked = !message.disliked;
                    tracing::info!("Message {} disliked={}", id, message.disliked);
                }
                None => tracing::warn!("Dislike for unknown message {}", id),
            },
            Intent::CopyCsv(message) => match csv_export::to_csv(&message) {
                Ok(csv) => {
                    tracing::info!("Copied {} bytes of CSV from message {}", csv.len(), message.id);
                    self.clipboard = Some(csv);
                }
                Err(e) => {
                    tracing::warn!("CSV export failed for message {}: {}", message.id, e);
                    self.ui_error = Some(e.to_string());
                }
            },
            Intent::Retry(id) => {
                if self.message(&id).is_none() {
                    tracing::warn!("Retry for unknown message {}", id);
                } else if self.pending_retries.contains(&id) {
                    tracing::debug!("Retry for message {} already pending", id);
                } else {
                    tracing::info!("Retry requested for message {}", id);
                    self.pending_retries.push(id);
                }
            }
        }
    }

    /// Hand the pending CSV to the clipboard owner
    pub fn take_clipboard(&mut self) -> Option<String> {
        self.clipboard.take()
    }

    pub fn liked_count(&self) -> usize {
        self.messages.iter().filter(|m| m.liked).count()
    }

    pub fn disliked_count(&self) -> usize {
        self.messages.iter().filter(|m| m.disliked).count()
    }
}

fn ensure_unique_ids(messages: &[Message]) -> Result<(), SharedError> {
    let mut seen = HashSet::new();
    for message in messages {
        if !seen.insert(message.id.as_str()) {
            return Err(SharedError::validation(
                "id",
                format!("duplicate message id '{}'", message.id),
            ));
        }
    }
    Ok(())
}
