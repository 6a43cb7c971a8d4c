//! JSON renderer for decoded records.

use serde::Serialize;

use crate::error::Result;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert any decoded record to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

/// Convert a record to JSON with default formatting.
pub fn to_json_default<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_json(value, JsonFormat::Pretty)
}
