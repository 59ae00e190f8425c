//! JSON and JSON Lines rendering.

use crate::error::Result;
use crate::model::UserRecord;
use serde::Serialize;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Serialize a value; non-ASCII text is written as-is.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

/// Render records as one pretty-printed JSON array.
pub fn to_json_array(records: &[UserRecord]) -> Result<String> {
    to_json(records, JsonFormat::Pretty)
}

/// Render records as JSON Lines: one compact object per line.
pub fn to_jsonl(records: &[UserRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&to_json(record, JsonFormat::Compact)?);
        out.push('\n');
    }
    Ok(out)
}
