//! Basic logger usage example
//!
//! Demonstrates field entries, the three message styles, hooks and both
//! formatters.
//!
//! Run with: cargo run --example basic_usage

use rust_field_logger::prelude::*;
use rust_field_logger::{info, infoln};

struct RequestCounter;

impl Hook for RequestCounter {
    fn levels(&self) -> Vec<LogLevel> {
        vec![LogLevel::Error]
    }

    fn fire(&self, entry: &mut Entry) -> Result<()> {
        entry.add_field("alerted", true);
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Rust Field Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .output_terminal(std::io::stdout())
        .formatter(TextFormatter::new().with_show_line_num(true))
        .hook(RequestCounter)
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Reusing an entry with fields:");
    let request = logger.with_fields([("request_id", "abc-123"), ("method", "GET")]);
    request.info("request received");
    request.with_field("status", 200).infof(format_args!("served in {}ms", 12));
    infoln!(request, "bytes", 512, "sent");
    info!(request.with_field("cache", "hit"), "{} found", "/index.html");

    println!("\n3. Reserved names do not clobber structural fields:");
    logger.with_field("msg", "user supplied").info("structural message");

    println!("\n4. Raising the minimum level:");
    logger.set_min_level(LogLevel::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n5. JSON output:");
    let json = Logger::builder()
        .output(std::io::stdout())
        .formatter(JsonFormatter::new())
        .build();
    json.with_field("user", "bob").info("logged in");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
