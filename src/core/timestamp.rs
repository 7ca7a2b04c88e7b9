//! Timestamp formatting for the structural `time` field
//!
//! Formatters write the entry timestamp into the field map as a string before
//! rendering, so every variant here produces text, including the numeric Unix
//! forms.

use super::error::{LoggerError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timestamp format options for the `time` field
///
/// # Examples
///
/// ```
/// use rust_field_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at).unwrap(), "2024-01-01T00:00:00Z");
///
/// let broken = TimestampFormat::Custom("%Q".to_string());
/// assert!(broken.format(&at).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with whole seconds: `2024-01-01T00:00:00Z`
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds: `2024-01-01T00:00:00.123Z`
    Iso8601Millis,

    /// Unix timestamp in seconds: `1704067200`
    Unix,

    /// Unix timestamp in milliseconds: `1704067200123`
    UnixMillis,

    /// Custom strftime format, e.g. `"%d/%b/%Y:%H:%M:%S %z"`
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`. Fails only for a `Custom` format string chrono
    /// cannot interpret.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let formatted = match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid timestamp format '{}'", format_str),
                    )
                })?;
                out
            }
        };
        Ok(formatted)
    }
}
