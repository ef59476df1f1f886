//! CSV Export
//!
//! Encodes a message's result set for the copy-CSV action. Columns follow
//! the message's `columns` order; null or missing values become empty
//! fields. Quoting follows RFC 4180.

use serde_json::Value;

use super::error::SharedError;
use super::message::Message;

/// Encode `message.results` as CSV with a header line
pub fn to_csv(message: &Message) -> Result<String, SharedError> {
    let columns = message
        .columns
        .as_ref()
        .ok_or_else(|| SharedError::export("message has no columns"))?;
    let rows = message
        .results
        .as_ref()
        .ok_or_else(|| SharedError::export("message has no results"))?;

    let mut out = String::new();
    push_line(&mut out, columns.iter().map(|c| escape_field(c)));
    for row in rows {
        push_line(
            &mut out,
            columns.iter().map(|col| escape_field(&field_text(row.get(col)))),
        );
    }
    Ok(out)
}

fn push_line(out: &mut String, fields: impl Iterator<Item = String>) {
    let line: Vec<String> = fields.collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
