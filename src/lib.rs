//! # Rust Field Logger
//!
//! A structured, leveled logging facade. Callers attach key/value fields to
//! an [`Entry`], pick a severity, and the entry is formatted and written to
//! the logger's output.
//!
//! ## Features
//!
//! - **Immutable entries**: adding fields returns a new entry, so a base entry
//!   can be shared across threads and reused
//! - **Level gating**: suppressed calls do no formatting work
//! - **Hooks**: per-level side effects fired before formatting
//! - **Text and JSON formatters**: colorized terminal output or quoted
//!   key=value pairs, with optional call-site capture
//!
//! ```
//! use rust_field_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .output(std::io::sink())
//!     .build();
//!
//! let db = logger.with_fields([("component", "db"), ("pool", "primary")]);
//! db.debug("connection acquired");
//! db.with_field("elapsed_ms", 42).info("query finished");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Entry, ExitHandler, FieldValue, Fields, Formatter, Hook, LevelHooks, LogLevel, Logger,
        LoggerBuilder, LoggerError, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
}

pub use crate::core::{
    sprint, sprintlnn, Entry, ExitHandler, FieldValue, Fields, Formatter, Hook, LevelHooks,
    LogLevel, Logger, LoggerBuilder, LoggerError, Result, TimestampFormat,
};
pub use formatters::{JsonFormatter, TextFormatter};
