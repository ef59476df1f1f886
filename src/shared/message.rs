/**
 * Message Data Structure
 *
 * This module defines the Message record rendered by the message view:
 * one conversation turn, optionally carrying a generated SQL query and
 * the tabular result of running it.
 *
 * The record is produced by the query layer (usually as JSON) and is
 * never mutated by the view. Feedback changes come back as new records.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single result record, keyed by column name
pub type Row = Map<String, Value>;

/// Who authored a turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Question typed by the user
    User,
    /// Answer produced by the assistant
    Assistant,
}

impl Role {
    pub fn is_user(self) -> bool {
        matches!(self, Role::User)
    }

    pub fn is_assistant(self) -> bool {
        matches!(self, Role::Assistant)
    }
}

/// Represents a single conversation turn
///
/// # Fields
/// * `id` - Unique identifier, passed back to the like/dislike/retry callbacks
/// * `role` - Author of the turn, drives layout and section eligibility
/// * `content` - Display text (whitespace and line breaks are preserved)
/// * `error` - Set when the turn failed
/// * `sql` - Generated query text
/// * `results` - Ordered result rows
/// * `columns` - Column order and header labels for `results`
/// * `row_count` - Logical total, shown instead of `results.len()` when present
/// * `liked` / `disliked` - Feedback state, independent of each other
/// * `timestamp` - When the turn was produced
///
/// # Example
/// ```rust
/// use querychat::shared::message::{Message, Role};
///
/// let message = Message::user("show sales");
/// assert_eq!(message.role, Role::User);
/// assert!(message.sql.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh id and the current UTC time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            error: None,
            sql: None,
            results: None,
            columns: None,
            row_count: None,
            liked: false,
            disliked: false,
            timestamp: Utc::now(),
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    /// Attach a result set together with its column order
    pub fn with_results(mut self, columns: Vec<String>, results: Vec<Row>) -> Self {
        self.columns = Some(columns);
        self.results = Some(results);
        self
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = Some(row_count);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Results and columns are both present (rows may still be empty)
    pub fn has_tabular_data(&self) -> bool {
        self.results.is_some() && self.columns.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_message_defaults() {
        let message = Message::assistant("Total sales");
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "Total sales");
        assert!(!message.liked);
        assert!(!message.disliked);
        assert!(!message.is_error());
        assert!(!message.has_tabular_data());
        assert!(Uuid::parse_str(&message.id).is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let value = json!({
            "id": "m-1",
            "role": "assistant",
            "content": "Total sales",
            "sql": "SELECT region, SUM(amount) AS total FROM sales GROUP BY region",
            "results": [{"region": "US", "total": 100}],
            "columns": ["region", "total"],
            "rowCount": 10,
            "liked": true,
            "timestamp": "2024-01-15T10:30:00Z"
        });

        let message: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message.id, "m-1");
        assert_eq!(message.row_count, Some(10));
        assert!(message.liked);
        assert!(!message.disliked);
        assert!(message.error.is_none());
        assert_eq!(message.results.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_missing_optional_fields() {
        let value = json!({
            "id": "m-2",
            "role": "user",
            "content": "show sales",
            "timestamp": "2024-01-15T10:30:00Z"
        });

        let message: Message = serde_json::from_value(value).unwrap();
        assert!(message.role.is_user());
        assert!(message.sql.is_none());
        assert!(message.results.is_none());
        assert!(message.columns.is_none());
        assert!(message.row_count.is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let value = json!({
            "id": "m-3",
            "role": "system",
            "content": "",
            "timestamp": "2024-01-15T10:30:00Z"
        });

        assert!(serde_json::from_value::<Message>(value).is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let message = Message::user("hi").with_id("u-1");
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("sql").is_none());
        assert!(value.get("rowCount").is_none());
        assert_eq!(value["role"], "user");
    }
}
