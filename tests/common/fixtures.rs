//! Message fixtures and a recording callback receiver

use chrono::{DateTime, TimeZone, Utc};
use querychat::shared::actions::MessageActions;
use querychat::shared::message::{Message, Row};
use querychat::shared::view::{MessageTree, UtcTimeFormatter};
use serde_json::Value;

/// Fixed point in time used by every fixture
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 14, 5, 9).unwrap()
}

/// Turn a JSON array of objects into result rows
pub fn rows(value: Value) -> Vec<Row> {
    serde_json::from_value(value).expect("rows fixture must be an array of objects")
}

pub fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// The "Total sales" assistant answer
pub fn total_sales() -> Message {
    Message::assistant("Total sales")
        .with_id("a-1")
        .with_sql("SELECT ...")
        .with_results(
            columns(&["region", "total"]),
            rows(serde_json::json!([{"region": "US", "total": 100}])),
        )
        .with_timestamp(fixed_time())
}

pub fn build(message: &Message) -> MessageTree {
    MessageTree::build(message, &UtcTimeFormatter::default())
}

/// One recorded callback invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Like(String),
    Dislike(String),
    CopyCsv(Message),
    Retry(String),
}

/// Records every callback in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl MessageActions for Recorder {
    fn on_like(&mut self, id: &str) {
        self.calls.push(Call::Like(id.to_string()));
    }

    fn on_dislike(&mut self, id: &str) {
        self.calls.push(Call::Dislike(id.to_string()));
    }

    fn on_copy_csv(&mut self, message: &Message) {
        self.calls.push(Call::CopyCsv(message.clone()));
    }

    fn on_retry(&mut self, id: &str) {
        self.calls.push(Call::Retry(id.to_string()));
    }
}
