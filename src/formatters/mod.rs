//! Formatter implementations

pub mod caller;
pub mod clash;
pub mod json;
pub mod text;

pub use caller::caller_with_line;
pub use clash::{prefix_field_clashes, RESERVED_KEYS};
pub use json::JsonFormatter;
pub use text::TextFormatter;

pub use crate::core::Formatter;

use crate::core::{Entry, Fields, Result, TimestampFormat};

/// Field map a formatter renders: user fields with reserved names moved out
/// of the way, the structural `time`/`level`/`msg` values, and `caller` when
/// requested.
pub(crate) fn working_fields(
    entry: &Entry,
    timestamp_format: &TimestampFormat,
    show_line_num: bool,
) -> Result<Fields> {
    let mut data = clash::structural_fields(entry, timestamp_format)?;
    if show_line_num {
        data.insert("caller".to_string(), caller_with_line(entry.caller()).into());
    }
    Ok(data)
}
