//! JSON formatter: one object per line
//!
//! Uses the same working field map as the text formatter, so reserved user
//! fields show up as `fields.time`, `fields.msg` and `fields.level`.

use super::clash::structural_str;
use super::working_fields;
use crate::core::{Entry, Formatter, Result, TimestampFormat};

const FORMAT_TYPE: &str = "json";

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub timestamp_format: TimestampFormat,
    pub show_line_num: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_show_line_num(mut self, show_line_num: bool) -> Self {
        self.show_line_num = show_line_num;
        self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let data = working_fields(entry, &self.timestamp_format, self.show_line_num)?;
        for key in ["time", "level", "msg"] {
            structural_str(&data, key, FORMAT_TYPE)?;
        }

        let object: serde_json::Map<String, serde_json::Value> = data
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json_value()))
            .collect();

        let mut serialized = serde_json::to_vec(&serde_json::Value::Object(object))?;
        serialized.push(b'\n');
        Ok(serialized)
    }
}
