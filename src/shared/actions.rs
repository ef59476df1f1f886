//! Message Actions
//!
//! The four user intents a rendered message can forward to its owner,
//! and the callback seam the owner implements to receive them.
//!
//! # Usage
//!
//! ```rust
//! use querychat::shared::actions::{dispatch, Action, Callbacks};
//! use querychat::shared::message::Message;
//!
//! let message = Message::assistant("Total sales").with_id("m-1");
//! let mut liked = Vec::new();
//! let mut callbacks = Callbacks::new(
//!     |id: &str| liked.push(id.to_string()),
//!     |_: &str| {},
//!     |_: &Message| {},
//!     |_: &str| {},
//! );
//! dispatch(Action::Like, &message, &mut callbacks);
//! drop(callbacks);
//! assert_eq!(liked, vec!["m-1".to_string()]);
//! ```

use std::fmt;

use super::message::Message;

/// A button in the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Like,
    Dislike,
    CopyCsv,
    Retry,
}

impl Action {
    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Action::Like => "Like",
            Action::Dislike => "Dislike",
            Action::CopyCsv => "Copy CSV",
            Action::Retry => "Retry",
        }
    }

    /// Hover text
    pub fn tooltip(self) -> &'static str {
        match self {
            Action::Like => "Like this response",
            Action::Dislike => "Dislike this response",
            Action::CopyCsv => "Copy results as CSV",
            Action::Retry => "Retry this response",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receiver of the actions a message view forwards upward.
///
/// Implementations own the conversation state. The view never waits on or
/// inspects what they do.
pub trait MessageActions {
    fn on_like(&mut self, id: &str);
    fn on_dislike(&mut self, id: &str);
    fn on_copy_csv(&mut self, message: &Message);
    fn on_retry(&mut self, id: &str);
}

/// Four plain closures bundled as a [`MessageActions`] implementation
pub struct Callbacks<L, D, C, R> {
    on_like: L,
    on_dislike: D,
    on_copy_csv: C,
    on_retry: R,
}

impl<L, D, C, R> Callbacks<L, D, C, R>
where
    L: FnMut(&str),
    D: FnMut(&str),
    C: FnMut(&Message),
    R: FnMut(&str),
{
    pub fn new(on_like: L, on_dislike: D, on_copy_csv: C, on_retry: R) -> Self {
        Self {
            on_like,
            on_dislike,
            on_copy_csv,
            on_retry,
        }
    }
}

impl<L, D, C, R> MessageActions for Callbacks<L, D, C, R>
where
    L: FnMut(&str),
    D: FnMut(&str),
    C: FnMut(&Message),
    R: FnMut(&str),
{
    fn on_like(&mut self, id: &str) {
        (self.on_like)(id)
    }

    fn on_dislike(&mut self, id: &str) {
        (self.on_dislike)(id)
    }

    fn on_copy_csv(&mut self, message: &Message) {
        (self.on_copy_csv)(message)
    }

    fn on_retry(&mut self, id: &str) {
        (self.on_retry)(id)
    }
}

/// Forward a clicked action to exactly one callback.
///
/// Like, dislike and retry receive the message id; copy-CSV receives the
/// whole record.
pub fn dispatch<A: MessageActions + ?Sized>(action: Action, message: &Message, actions: &mut A) {
    tracing::debug!("action {} clicked on message {}", action, message.id);
    match action {
        Action::Like => actions.on_like(&message.id),
        Action::Dislike => actions.on_dislike(&message.id),
        Action::CopyCsv => actions.on_copy_csv(message),
        Action::Retry => actions.on_retry(&message.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl MessageActions for Recorder {
        fn on_like(&mut self, id: &str) {
            self.calls.push(format!("like:{}", id));
        }
        fn on_dislike(&mut self, id: &str) {
            self.calls.push(format!("dislike:{}", id));
        }
        fn on_copy_csv(&mut self, message: &Message) {
            self.calls.push(format!("csv:{}", message.content));
        }
        fn on_retry(&mut self, id: &str) {
            self.calls.push(format!("retry:{}", id));
        }
    }

    #[test]
    fn test_dispatch_routes_each_action_once() {
        let message = Message::assistant("Total sales").with_id("m-7");
        let mut recorder = Recorder::default();

        dispatch(Action::Like, &message, &mut recorder);
        dispatch(Action::Dislike, &message, &mut recorder);
        dispatch(Action::CopyCsv, &message, &mut recorder);
        dispatch(Action::Retry, &message, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec!["like:m-7", "dislike:m-7", "csv:Total sales", "retry:m-7"]
        );
    }

    #[test]
    fn test_callbacks_copy_csv_gets_full_record() {
        let message = Message::assistant("Total sales")
            .with_id("m-8")
            .with_sql("SELECT 1");
        let mut seen: Option<Message> = None;
        {
            let mut callbacks = Callbacks::new(
                |_: &str| panic!("like must not fire"),
                |_: &str| panic!("dislike must not fire"),
                |m: &Message| seen = Some(m.clone()),
                |_: &str| panic!("retry must not fire"),
            );
            dispatch(Action::CopyCsv, &message, &mut callbacks);
        }
        assert_eq!(seen, Some(message));
    }

    #[test]
    fn test_labels_and_tooltips() {
        assert_eq!(Action::CopyCsv.label(), "Copy CSV");
        assert_eq!(Action::Retry.tooltip(), "Retry this response");
        assert_eq!(Action::Dislike.to_string(), "Dislike");
    }
}
