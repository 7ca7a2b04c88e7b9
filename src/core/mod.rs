//! Core logger types and traits

pub mod entry;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod hooks;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use entry::{sprint, sprintlnn, Concat, Entry};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use formatter::Formatter;
pub use hooks::{Hook, LevelHooks};
pub use log_level::LogLevel;
pub use logger::{ExitHandler, Logger, LoggerBuilder};
pub use timestamp::TimestampFormat;
