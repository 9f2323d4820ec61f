//! Cell accessors for positional sheet rows.
//!
//! Spreadsheet cells arrive as JSON strings or numbers depending on how the
//! sheet happens to be formatted, so every accessor coerces both shapes.
//! Identity columns use [`required_str`]; everything else decodes leniently
//! to a default so a sparsely filled row never aborts a whole listing.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Reads a column that must be present and non-empty (record ids, emails).
pub(crate) fn required_str(row: &[Value], idx: usize, field: &str) -> Result<String> {
    match row.get(idx) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(Error::Row {
            message: format!("missing required column {idx} ({field})"),
        }),
    }
}

/// Reads a string column, falling back to `""` when absent or non-text.
pub(crate) fn str_or_default(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Reads an optional string column; empty cells become `None`.
pub(crate) fn opt_str(row: &[Value], idx: usize) -> Option<String> {
    let s = str_or_default(row, idx);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Reads a numeric column, accepting numbers and numeric strings.
pub(crate) fn f64_or_default(row: &[Value], idx: usize) -> f64 {
    match row.get(idx) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

/// Reads an integer column, accepting numbers and numeric strings.
pub(crate) fn i64_or(row: &[Value], idx: usize, default: i64) -> i64 {
    match row.get(idx) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Reads an RFC 3339 timestamp column.
///
/// Unparseable or missing values fall back to the UNIX epoch so that
/// newest-first ordering stays a total order instead of silently scrambling.
pub(crate) fn timestamp_or_epoch(row: &[Value], idx: usize) -> DateTime<Utc> {
    match row.get(idx) {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map_or(DateTime::UNIX_EPOCH, |dt| dt.with_timezone(&Utc)),
        _ => DateTime::UNIX_EPOCH,
    }
}
