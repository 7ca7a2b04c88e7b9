//! Field name clash resolution
//!
//! `time`, `level` and `msg` are written by the formatter itself. A user field
//! with one of those names is renamed to `fields.<name>` so it neither hides
//! nor is hidden by the structural value.

use crate::core::{Entry, FieldValue, Fields, LoggerError, Result, TimestampFormat};

pub const RESERVED_KEYS: [&str; 3] = ["time", "msg", "level"];

pub fn prefix_field_clashes(data: &mut Fields) {
    for key in RESERVED_KEYS {
        if let Some(value) = data.remove(key) {
            data.insert(format!("fields.{}", key), value);
        }
    }
}

/// Copy of the entry's fields with clashes resolved and the structural
/// fields filled in from the entry. A structural field is left out when the
/// entry has no value for it (an entry that was never emitted).
pub fn structural_fields(entry: &Entry, timestamp_format: &TimestampFormat) -> Result<Fields> {
    let mut data = entry.data().clone();
    prefix_field_clashes(&mut data);

    if let Some(time) = entry.time() {
        data.insert("time".to_string(), timestamp_format.format(&time)?.into());
    }
    if let Some(level) = entry.level() {
        data.insert("level".to_string(), level.as_str().into());
    }
    if let Some(message) = entry.message() {
        data.insert("msg".to_string(), message.into());
    }
    Ok(data)
}

/// Look up a structural field that must hold a string.
pub(crate) fn structural_str<'a>(data: &'a Fields, key: &str, format_type: &str) -> Result<&'a str> {
    match data.get(key) {
        Some(FieldValue::String(s)) => Ok(s),
        Some(other) => Err(LoggerError::formatter(
            format_type,
            format!("field '{}' must be a string, got {}", key, other),
        )),
        None => Err(LoggerError::formatter(
            format_type,
            format!("field '{}' is missing", key),
        )),
    }
}
