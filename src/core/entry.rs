//! Log entry: accumulated fields plus the leveled emission surface
//!
//! An [`Entry`] is never changed by adding fields; `with_field` and
//! `with_fields` return a new entry holding a copy of the old map plus the
//! new fields. A base entry can therefore be shared between threads and reused
//! for any number of log calls.
//!
//! ```
//! use rust_field_logger::prelude::*;
//!
//! let logger = Logger::builder().output(std::io::sink()).build();
//! let request = logger.with_field("request_id", "abc-123");
//!
//! request.info("accepted");
//! request.with_field("status", 404).warnf(format_args!("{} not found", "/missing"));
//! request.infoln(&[&"took", &12, &"ms"]);
//! ```

use super::{error::Result, fields::FieldValue, fields::Fields, log_level::LogLevel, logger::Logger};
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Cursor;
use std::panic::Location;

#[derive(Debug, Clone)]
pub struct Entry {
    logger: Logger,
    data: Fields,
    time: Option<DateTime<Utc>>,
    level: Option<LogLevel>,
    message: Option<String>,
    caller: Option<&'static Location<'static>>,
}

/// Concatenate operands with no separator.
pub fn sprint(args: &[&dyn fmt::Display]) -> String {
    Concat(args).to_string()
}

/// Join operands with single spaces, without a trailing newline.
pub fn sprintlnn(args: &[&dyn fmt::Display]) -> String {
    use fmt::Write;

    let mut message = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{}", arg);
    }
    message
}

/// Lazily concatenated operands, rendered only when displayed.
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arg in self.0 {
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

macro_rules! severity_methods {
    ($level:expr, $name:literal, $plain:ident, $formatted:ident, $line:ident) => {
        #[doc = concat!("Log `message` at ", $name, " level.")]
        #[track_caller]
        pub fn $plain(&self, message: impl fmt::Display) {
            if self.logger.is_enabled($level) {
                self.log($level, message.to_string(), Location::caller());
            }
        }

        #[doc = concat!("Log a `format_args!` message at ", $name, " level.")]
        #[track_caller]
        pub fn $formatted(&self, args: fmt::Arguments<'_>) {
            if self.logger.is_enabled($level) {
                self.log($level, fmt::format(args), Location::caller());
            }
        }

        #[doc = concat!("Log space-separated operands at ", $name, " level.")]
        #[track_caller]
        pub fn $line(&self, args: &[&dyn fmt::Display]) {
            if self.logger.is_enabled($level) {
                self.log($level, sprintlnn(args), Location::caller());
            }
        }
    };
}

impl Entry {
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.clone(),
            data: Fields::new(),
            time: None,
            level: None,
            message: None,
            caller: None,
        }
    }

    /// Add a single field, returning a new entry.
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_fields([(key, value)])
    }

    /// Add a set of fields, returning a new entry. New fields win on key
    /// collision; `self` is left untouched.
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut data = self.data.clone();
        data.extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        Entry {
            logger: self.logger.clone(),
            data,
            time: None,
            level: None,
            message: None,
            caller: None,
        }
    }

    /// Attach an error's text under the `error` key.
    #[must_use]
    pub fn with_error(&self, err: &dyn std::error::Error) -> Entry {
        self.with_field("error", FieldValue::display(err))
    }

    /// Insert a field into this entry in place. Intended for hooks, which
    /// receive the entry being emitted.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.data.insert(key.into(), value.into());
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn data(&self) -> &Fields {
        &self.data
    }

    /// Emission time; `None` until the entry is emitted.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Call site of the severity method that emitted this entry.
    pub fn caller(&self) -> Option<&'static Location<'static>> {
        self.caller
    }

    /// Formatted bytes of this entry, produced by the logger's formatter.
    pub fn reader(&self) -> Result<Cursor<Vec<u8>>> {
        self.logger.formatter().format(self).map(Cursor::new)
    }

    /// Formatted line of this entry as a string.
    pub fn to_line(&self) -> Result<String> {
        let bytes = self.reader()?.into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Emit `message` at `level` if the logger lets it through. Returns the
    /// rendered line, or `None` when the level is suppressed.
    #[track_caller]
    pub fn emit(&self, level: LogLevel, message: impl fmt::Display) -> Option<String> {
        if !self.logger.is_enabled(level) {
            return None;
        }
        Some(self.log(level, message.to_string(), Location::caller()))
    }

    /// Copy of this entry carrying emission data, as hooks and formatters
    /// see it.
    pub(crate) fn stamped(
        &self,
        time: DateTime<Utc>,
        level: LogLevel,
        message: String,
        caller: Option<&'static Location<'static>>,
    ) -> Entry {
        Entry {
            logger: self.logger.clone(),
            data: self.data.clone(),
            time: Some(time),
            level: Some(level),
            message: Some(message),
            caller,
        }
    }

    fn log(&self, level: LogLevel, message: String, caller: &'static Location<'static>) -> String {
        let mut entry = self.stamped(Utc::now(), level, message, Some(caller));

        if let Err(e) = self.logger.fire_hooks(level, &mut entry) {
            eprintln!("[LOGGER ERROR] Failed to fire hook: {}", e);
        }

        let serialized = match entry.reader() {
            Ok(reader) => reader.into_inner(),
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to obtain reader: {}", e);
                Vec::new()
            }
        };

        if let Err(e) = self.logger.write_serialized(&serialized) {
            eprintln!("[LOGGER ERROR] Failed to write to log: {}", e);
        }

        String::from_utf8_lossy(&serialized).into_owned()
    }

    severity_methods!(LogLevel::Debug, "debug", debug, debugf, debugln);
    severity_methods!(LogLevel::Info, "info", info, infof, infoln);
    severity_methods!(LogLevel::Info, "info", print, printf, println);
    severity_methods!(LogLevel::Warn, "warning", warn, warnf, warnln);
    severity_methods!(LogLevel::Warn, "warning", warning, warningf, warningln);
    severity_methods!(LogLevel::Error, "error", error, errorf, errorln);

    /// Log at fatal level, then exit the process with status 1.
    ///
    /// The exit happens even when fatal logging is suppressed.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        if self.logger.is_enabled(LogLevel::Fatal) {
            self.log(LogLevel::Fatal, message.to_string(), Location::caller());
        }
        self.logger.exit(1);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        if self.logger.is_enabled(LogLevel::Fatal) {
            self.log(LogLevel::Fatal, fmt::format(args), Location::caller());
        }
        self.logger.exit(1);
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[&dyn fmt::Display]) {
        if self.logger.is_enabled(LogLevel::Fatal) {
            self.log(LogLevel::Fatal, sprintlnn(args), Location::caller());
        }
        self.logger.exit(1);
    }

    /// Log at panic level, then panic with the rendered line as payload.
    ///
    /// The payload is a `String`; use `std::panic::catch_unwind` to recover.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.raise(message.to_string(), Location::caller())
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(fmt::format(args), Location::caller())
    }

    #[track_caller]
    pub fn panicln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.raise(sprintlnn(args), Location::caller())
    }

    fn raise(&self, message: String, caller: &'static Location<'static>) -> ! {
        if self.logger.is_enabled(LogLevel::Panic) {
            let rendered = self.log(LogLevel::Panic, message.clone(), caller);
            if !rendered.is_empty() {
                std::panic::panic_any(rendered);
            }
        }
        std::panic::panic_any(message)
    }
}
