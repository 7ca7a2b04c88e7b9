//! Formatter trait for rendering entries

use super::{entry::Entry, error::Result};

/// Renders an emitted entry into the bytes written to the logger output.
///
/// Implementations only read the entry; the formatter works on its own copy
/// of the field map when it needs to add structural fields.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>>;
}
