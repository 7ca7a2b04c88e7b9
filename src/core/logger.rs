//! Main logger implementation
//!
//! The [`Logger`] is the owning context every [`Entry`] refers to. It holds
//! the output sink, the minimum level, the formatter and the hook registry.
//! Cloning a logger is cheap and every clone shares the same state.

use super::{
    entry::Entry,
    error::{LoggerError, Result},
    fields::FieldValue,
    formatter::Formatter,
    hooks::{self, Hook, LevelHooks},
    log_level::LogLevel,
};
use crate::formatters::{self, TextFormatter};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{IsTerminal, Write};
use std::sync::Arc;

/// Called by the fatal severity methods with the exit status.
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct Logger {
    /// Output sink. The mutex is held only for the final write of an
    /// already formatted entry.
    out: SharedOutput,
    /// Whether `out` was a terminal when the logger was built.
    output_is_terminal: bool,
    min_level: Arc<RwLock<LogLevel>>,
    formatter: Arc<dyn Formatter>,
    hooks: Arc<RwLock<LevelHooks>>,
    exit_handler: ExitHandler,
}

macro_rules! delegate_severity {
    ($($plain:ident, $formatted:ident, $line:ident);+ $(;)?) => {
        $(
            #[inline]
            #[track_caller]
            pub fn $plain(&self, message: impl fmt::Display) {
                self.entry().$plain(message);
            }

            #[inline]
            #[track_caller]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.entry().$formatted(args);
            }

            #[inline]
            #[track_caller]
            pub fn $line(&self, args: &[&dyn fmt::Display]) {
                self.entry().$line(args);
            }
        )+
    };
}

impl Logger {
    /// Create a logger writing text to stderr at `Info` level.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether an entry at `level` passes the minimum level gate.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    pub fn add_hook<H: Hook + 'static>(&self, hook: H) {
        self.hooks.write().add(Arc::new(hook));
    }

    /// Whether the output sink is a terminal. Only known for sinks set with
    /// [`LoggerBuilder::output_terminal`] and for the default stderr sink;
    /// any other sink counts as not a terminal.
    pub fn output_is_terminal(&self) -> bool {
        self.output_is_terminal
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// A fresh entry with no fields.
    pub fn entry(&self) -> Entry {
        Entry::new(self)
    }

    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry().with_field(key, value)
    }

    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry().with_fields(fields)
    }

    #[must_use]
    pub fn with_error(&self, err: &dyn std::error::Error) -> Entry {
        self.entry().with_error(err)
    }

    pub fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        Ok(())
    }

    pub(crate) fn fire_hooks(&self, level: LogLevel, entry: &mut Entry) -> Result<()> {
        // Snapshot so hooks can log through this logger without holding the lock.
        let registered = self.hooks.read().for_level(level);
        hooks::fire_all(&registered, entry)
    }

    /// Write one formatted entry to the output. The lock is released when
    /// the guard drops, including on the error paths.
    pub(crate) fn write_serialized(&self, serialized: &[u8]) -> Result<()> {
        if serialized.is_empty() {
            return Ok(());
        }
        let mut out = self.out.lock();
        let written = match out.write_all(serialized) {
            Ok(()) => out.flush(),
            Err(e) => Err(e),
        };
        written.map_err(|e| LoggerError::writer(e.to_string()))
    }

    pub(crate) fn exit(&self, code: i32) {
        (self.exit_handler)(code);
    }

    delegate_severity! {
        debug, debugf, debugln;
        info, infof, infoln;
        print, printf, println;
        warn, warnf, warnln;
        warning, warningf, warningln;
        error, errorf, errorln;
        fatal, fatalf, fatalln;
    }

    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.entry().panic(message)
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.entry().panicf(args)
    }

    #[track_caller]
    pub fn panicln(&self, args: &[&dyn fmt::Display]) -> ! {
        self.entry().panicln(args)
    }

    /// Emit at an explicit level; see [`Entry::emit`].
    #[track_caller]
    pub fn emit(&self, level: LogLevel, message: impl fmt::Display) -> Option<String> {
        self.entry().emit(level, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("output_is_terminal", &self.output_is_terminal)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_field_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .output(std::io::stdout())
///     .formatter(TextFormatter::new().with_show_line_num(true))
///     .build();
///
/// logger.with_field("port", 8080).info("listening");
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    out: Box<dyn Write + Send>,
    out_is_terminal: bool,
    formatter: Arc<dyn Formatter>,
    hooks: LevelHooks,
    exit_handler: ExitHandler,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            out: Box::new(std::io::stderr()),
            out_is_terminal: std::io::stderr().is_terminal(),
            formatter: Arc::new(TextFormatter::default()),
            hooks: LevelHooks::new(),
            exit_handler: Arc::new(|code| std::process::exit(code)),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the output sink. Defaults to stderr. The sink is treated as not
    /// being a terminal.
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, out: W) -> Self {
        self.out = Box::new(out);
        self.out_is_terminal = false;
        self
    }

    /// Set an output sink that can report whether it is a terminal, such as
    /// `std::io::stdout()` or a `File`.
    #[must_use = "builder methods return a new value"]
    pub fn output_terminal<W: Write + IsTerminal + Send + 'static>(mut self, out: W) -> Self {
        self.out_is_terminal = out.is_terminal();
        self.out = Box::new(out);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Register a hook
    #[must_use = "builder methods return a new value"]
    pub fn hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.add(Arc::new(hook));
        self
    }

    /// Replace the handler invoked by fatal logging. Defaults to
    /// `std::process::exit`.
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit_handler = handler;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        formatters::text::init_base_timestamp();

        Logger {
            out: Arc::new(Mutex::new(self.out)),
            output_is_terminal: self.out_is_terminal,
            min_level: Arc::new(RwLock::new(self.min_level)),
            formatter: self.formatter,
            hooks: Arc::new(RwLock::new(self.hooks)),
            exit_handler: self.exit_handler,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
