//! Text formatter
//!
//! Renders an entry either as colorized text for a terminal:
//!
//! ```text
//! \x1b[34mINFO\x1b[0m[0004] user logged in                          \x1b[34muser\x1b[0m=bob
//! ```
//!
//! or as plain key=value pairs for everything else:
//!
//! ```text
//! time="2024-01-01T00:00:00Z" level=info msg="user logged in" user="bob"
//! ```

use super::clash::{structural_str, RESERVED_KEYS};
use super::working_fields;
use crate::core::{
    Entry, FieldValue, Fields, Formatter, LogLevel, Logger, Result, TimestampFormat,
};
use std::fmt::Write as _;
use std::sync::OnceLock;
use std::time::Instant;

const FORMAT_TYPE: &str = "text";
const MESSAGE_WIDTH: usize = 44;

static BASE_TIMESTAMP: OnceLock<Instant> = OnceLock::new();

/// Fix the reference instant for the seconds counter in colorized output.
/// Called when a logger is built; later calls keep the first instant.
pub(crate) fn init_base_timestamp() {
    BASE_TIMESTAMP.get_or_init(Instant::now);
}

fn mini_ts() -> u64 {
    BASE_TIMESTAMP.get_or_init(Instant::now).elapsed().as_secs()
}

#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Use colors even when the output is not a terminal.
    pub force_colors: bool,
    /// Never use colors. Wins over `force_colors`.
    pub disable_colors: bool,
    /// Add a `caller` field with the `file:line` of the log call.
    pub show_line_num: bool,
    pub timestamp_format: TimestampFormat,
    is_terminal: Option<fn() -> bool>,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            force_colors: false,
            disable_colors: false,
            show_line_num: false,
            timestamp_format: TimestampFormat::default(),
            is_terminal: None,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_force_colors(mut self, force_colors: bool) -> Self {
        self.force_colors = force_colors;
        self
    }

    #[must_use]
    pub fn with_disable_colors(mut self, disable_colors: bool) -> Self {
        self.disable_colors = disable_colors;
        self
    }

    #[must_use]
    pub fn with_show_line_num(mut self, show_line_num: bool) -> Self {
        self.show_line_num = show_line_num;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the terminal check. By default the formatter uses what the
    /// logger recorded about its output when it was built.
    #[must_use]
    pub fn with_terminal_check(mut self, is_terminal: fn() -> bool) -> Self {
        self.is_terminal = Some(is_terminal);
        self
    }

    /// Whether entries of `logger` are rendered in the colorized layout.
    pub fn use_colors(&self, logger: &Logger) -> bool {
        let is_terminal = match self.is_terminal {
            Some(check) => check(),
            None => logger.output_is_terminal(),
        };
        (self.force_colors || is_terminal) && !self.disable_colors
    }

    fn format_colored(&self, b: &mut String, data: &Fields) -> Result<()> {
        let level = structural_str(data, "level", FORMAT_TYPE)?;
        let color = level
            .parse::<LogLevel>()
            .map(|level| level.color_code())
            .unwrap_or(colored::Color::Blue);
        let color = color.to_fg_str();

        let level_text: String = level.to_uppercase().chars().take(4).collect();
        let message = data.get("msg").map(ToString::to_string).unwrap_or_default();

        let _ = write!(
            b,
            "\x1b[{}m{}\x1b[0m[{:04}] {:<width$} ",
            color,
            level_text,
            mini_ts(),
            message,
            width = MESSAGE_WIDTH
        );

        let mut first = true;
        for (key, value) in data.iter().filter(|(key, _)| !is_reserved(key)) {
            if !first {
                b.push(' ');
            }
            first = false;
            let _ = write!(b, "\x1b[{}m{}\x1b[0m={}", color, key, value);
        }
        Ok(())
    }

    fn format_plain(&self, b: &mut String, data: &Fields) -> Result<()> {
        let time = structural_str(data, "time", FORMAT_TYPE)?;
        let level = structural_str(data, "level", FORMAT_TYPE)?;
        let message = structural_str(data, "msg", FORMAT_TYPE)?;

        let _ = write!(b, "time={:?} level={} msg={:?}", time, level, message);

        for (key, value) in data.iter().filter(|(key, _)| !is_reserved(key)) {
            append_key_value(b, key, value);
        }
        Ok(())
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let data = working_fields(entry, &self.timestamp_format, self.show_line_num)?;
        let mut b = String::with_capacity(128);

        if self.use_colors(entry.logger()) {
            self.format_colored(&mut b, &data)?;
        } else {
            self.format_plain(&mut b, &data)?;
        }

        b.push('\n');
        Ok(b.into_bytes())
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Strings are quoted and escaped, every other value is written as is.
fn append_key_value(b: &mut String, key: &str, value: &FieldValue) {
    let _ = match value {
        FieldValue::String(s) => write!(b, " {}={:?}", key, s),
        other => write!(b, " {}={}", key, other),
    };
}
