//! Message View Tree
//!
//! Toolkit-independent description of what a rendered message shows.
//! [`MessageTree::build`] makes every visibility decision and formats every
//! table cell; the egui component only paints the result.
//!
//! # Section visibility
//!
//! | Section         | Shown when                                          |
//! |-----------------|-----------------------------------------------------|
//! | Query block     | `sql` present and no error                          |
//! | Results table   | `results` non-empty, `columns` present, no error    |
//! | Action row      | assistant turn                                      |
//! | Copy CSV button | `results` and `columns` present                     |
//!
//! User turns never show the query block, results table or action row.

use std::fmt::{self, Write};

use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use super::actions::Action;
use super::message::{Message, Role, Row};

/// Shown in a table cell whose value is null or missing
pub const EMPTY_CELL: &str = "-";

/// Horizontal placement of a message within the conversation column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Trailing edge (user turns)
    End,
    /// Centered (assistant turns)
    Center,
}

/// Bounded width class of the message container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    Compact,
    Wide,
}

/// Text size class of the message body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Base,
}

/// Container geometry, decided by role alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub alignment: Alignment,
    pub width: WidthClass,
    pub text_size: TextSize,
}

impl Layout {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self {
                alignment: Alignment::End,
                width: WidthClass::Compact,
                text_size: TextSize::Small,
            },
            Role::Assistant => Self {
                alignment: Alignment::Center,
                width: WidthClass::Wide,
                text_size: TextSize::Base,
            },
        }
    }
}

/// The three mutually exclusive bubble treatments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleStyle {
    User,
    Error,
    Assistant,
}

impl BubbleStyle {
    /// User turns keep the user treatment even when `error` is set.
    pub fn for_message(message: &Message) -> Self {
        if message.role.is_user() {
            BubbleStyle::User
        } else if message.is_error() {
            BubbleStyle::Error
        } else {
            BubbleStyle::Assistant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBlock {
    pub sql: String,
}

/// Fully formatted result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// `rowCount` when the record carries one, otherwise the number of rows
    pub row_count: u64,
}

impl ResultsTable {
    /// Caption shown above the table
    pub fn caption(&self) -> String {
        format!("Results ({} rows)", self.row_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: Action,
    /// Pressed look for like/dislike; decoration only
    pub active: bool,
}

/// Everything one render of a message shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTree {
    pub layout: Layout,
    pub bubble: BubbleStyle,
    pub content: String,
    pub query: Option<QueryBlock>,
    pub results: Option<ResultsTable>,
    /// `None` for user turns
    pub actions: Option<Vec<ActionButton>>,
    pub timestamp: String,
}

impl MessageTree {
    /// Build the tree for one message. Pure and total over its input.
    pub fn build(message: &Message, formatter: &dyn TimeFormatter) -> Self {
        let assistant = message.role.is_assistant();
        let clean = assistant && !message.is_error();

        let query = match &message.sql {
            Some(sql) if clean => Some(QueryBlock { sql: sql.clone() }),
            _ => None,
        };

        let results = match (&message.results, &message.columns) {
            (Some(rows), Some(columns)) if clean && !rows.is_empty() => {
                Some(build_table(columns, rows, message.row_count))
            }
            _ => None,
        };

        let actions = assistant.then(|| action_row(message));

        Self {
            layout: Layout::for_role(message.role),
            bubble: BubbleStyle::for_message(message),
            content: message.content.clone(),
            query,
            results,
            actions,
            timestamp: formatter.format_time(&message.timestamp),
        }
    }

    pub fn has_action(&self, action: Action) -> bool {
        self.actions
            .as_ref()
            .is_some_and(|buttons| buttons.iter().any(|b| b.action == action))
    }
}

fn build_table(columns: &[String], rows: &[Row], row_count: Option<u64>) -> ResultsTable {
    let body = rows
        .iter()
        .map(|row| columns.iter().map(|col| cell_text(row.get(col))).collect())
        .collect();

    ResultsTable {
        header: columns.to_vec(),
        rows: body,
        row_count: row_count.unwrap_or(rows.len() as u64),
    }
}

fn action_row(message: &Message) -> Vec<ActionButton> {
    let mut buttons = vec![
        ActionButton {
            action: Action::Like,
            active: message.liked,
        },
        ActionButton {
            action: Action::Dislike,
            active: message.disliked,
        },
    ];
    if message.has_tabular_data() {
        buttons.push(ActionButton {
            action: Action::CopyCsv,
            active: false,
        });
    }
    buttons.push(ActionButton {
        action: Action::Retry,
        active: false,
    });
    buttons
}

/// Display form of a single cell.
///
/// Strings render verbatim, null or missing values render as [`EMPTY_CELL`],
/// everything else renders as compact JSON (`5`, `true`, `[1,2]`).
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Turns a message timestamp into the time-of-day label under the bubble
pub trait TimeFormatter {
    fn format_time(&self, timestamp: &DateTime<Utc>) -> String;
}

impl<F> TimeFormatter for F
where
    F: Fn(&DateTime<Utc>) -> String,
{
    fn format_time(&self, timestamp: &DateTime<Utc>) -> String {
        self(timestamp)
    }
}

/// Default 12-hour clock pattern, e.g. `3:07:42 PM`
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Formats in the machine's local time zone
#[derive(Debug, Clone)]
pub struct LocalTimeFormatter {
    pattern: String,
}

impl LocalTimeFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for LocalTimeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

impl TimeFormatter for LocalTimeFormatter {
    fn format_time(&self, timestamp: &DateTime<Utc>) -> String {
        let local = timestamp.with_timezone(&Local);
        render_pattern(&self.pattern, |pattern, out| write!(out, "{}", local.format(pattern)))
    }
}

/// Formats in UTC, independent of the host time zone
#[derive(Debug, Clone)]
pub struct UtcTimeFormatter {
    pattern: String,
}

impl UtcTimeFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for UtcTimeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

impl TimeFormatter for UtcTimeFormatter {
    fn format_time(&self, timestamp: &DateTime<Utc>) -> String {
        render_pattern(&self.pattern, |pattern, out| write!(out, "{}", timestamp.format(pattern)))
    }
}

/// Format with `pattern`, falling back to [`DEFAULT_TIME_FORMAT`] when the
/// pattern contains an unknown specifier.
fn render_pattern<F>(pattern: &str, format: F) -> String
where
    F: Fn(&str, &mut String) -> fmt::Result,
{
    let mut out = String::new();
    if format(pattern, &mut out).is_ok() {
        return out;
    }
    tracing::warn!("Invalid time format '{}', using default", pattern);
    out.clear();
    match format(DEFAULT_TIME_FORMAT, &mut out) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}
