//! Logging macros for ergonomic log message formatting.
//!
//! Every macro takes a [`Logger`](crate::Logger) or an [`Entry`](crate::Entry)
//! as its first argument. The plain level macros take a format string, like
//! `println!`; the `*ln` macros join their operands with spaces; `sprint!`
//! concatenates operands with no separator.
//!
//! # Examples
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::{info, infoln, sprint, warn};
//!
//! let logger = Logger::builder().output(std::io::sink()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger.with_field("port", port), "Server listening on port {}", port);
//!
//! infoln!(logger, "took", 12, "ms");
//! logger.warn(sprint!("retry ", 3, "/", 5));
//! warn!(logger, "Low disk space");
//! ```

/// Concatenate operands with no separator, lazily.
///
/// ```
/// use rust_field_logger::sprint;
/// assert_eq!(sprint!("a", 1, "b").to_string(), "a1b");
/// ```
#[macro_export]
macro_rules! sprint {
    ($($arg:expr),+ $(,)?) => {
        $crate::core::Concat(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log a formatted message at an explicit level.
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let logger = Logger::builder().output(std::io::sink()).build();
/// use rust_field_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, $($arg:tt)+) => {
        $target.emit($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($target:expr, $($arg:tt)+) => {
        $target.debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($target:expr, $($arg:tt)+) => {
        $target.infof(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($target:expr, $($arg:tt)+) => {
        $target.warnf(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($target:expr, $($arg:tt)+) => {
        $target.errorf(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then invoke the logger's exit handler.
#[macro_export]
macro_rules! fatal {
    ($target:expr, $($arg:tt)+) => {
        $target.fatalf(::std::format_args!($($arg)+))
    };
}

/// Log a panic-level message, then panic with the rendered line.
#[macro_export]
macro_rules! panic_log {
    ($target:expr, $($arg:tt)+) => {
        $target.panicf(::std::format_args!($($arg)+))
    };
}

/// Log space-separated operands at debug level.
#[macro_export]
macro_rules! debugln {
    ($target:expr, $($arg:expr),+ $(,)?) => {
        $target.debugln(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log space-separated operands at info level.
#[macro_export]
macro_rules! infoln {
    ($target:expr, $($arg:expr),+ $(,)?) => {
        $target.infoln(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log space-separated operands at warning level.
#[macro_export]
macro_rules! warnln {
    ($target:expr, $($arg:expr),+ $(,)?) => {
        $target.warnln(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log space-separated operands at error level.
#[macro_export]
macro_rules! errorln {
    ($target:expr, $($arg:expr),+ $(,)?) => {
        $target.errorln(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::formatters::TextFormatter;
    use parking_lot::Mutex;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn capturing_logger() -> (Logger, Captured) {
        let out = Captured::default();
        let logger = Logger::builder()
            .min_level(LogLevel::Debug)
            .output(out.clone())
            .formatter(TextFormatter::new().with_disable_colors(true))
            .exit_handler(Arc::new(|_| {}))
            .build();
        (logger, out)
    }

    #[test]
    fn test_log_macro() {
        let (logger, out) = capturing_logger();
        let rendered = log!(logger, LogLevel::Info, "Formatted: {}", 42);

        assert!(rendered.is_some());
        assert!(out.text().contains("msg=\"Formatted: 42\""));
    }

    #[test]
    fn test_level_macros() {
        let (logger, out) = capturing_logger();
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let text = out.text();
        assert!(text.contains("level=debug msg=\"Count: 5\""));
        assert!(text.contains("level=info msg=\"Items: 100\""));
        assert!(text.contains("level=warning msg=\"Retry 1 of 3\""));
        assert!(text.contains("level=error msg=\"Code: 500\""));
        assert!(text.contains("level=fatal msg=\"Critical failure: system\""));
    }

    #[test]
    fn test_line_macros() {
        let (logger, out) = capturing_logger();
        let entry = logger.with_field("k", 1);
        infoln!(entry, "a", "b");
        errorln!(entry, "took", 12, "ms");

        let text = out.text();
        assert!(text.contains("msg=\"a b\" k=1"));
        assert!(text.contains("msg=\"took 12 ms\" k=1"));
    }

    #[test]
    fn test_sprint_macro() {
        let (logger, out) = capturing_logger();
        logger.info(sprint!("a", 1, "b"));
        assert!(out.text().contains("msg=\"a1b\""));
    }
}
