//! Stress tests for concurrent emission
//!
//! These tests verify:
//! - Each entry reaches the output as one uninterrupted write
//! - No bytes are lost or duplicated under contention
//! - A shared base entry can be reused from many threads

mod common;

use common::{plain_formatter, RecordingSink, SharedBuffer};
use rust_field_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

#[test]
fn test_concurrent_writes_are_not_interleaved() {
    let sink = RecordingSink::default();
    let logger = Logger::builder()
        .output(sink.clone())
        .formatter(plain_formatter())
        .build();
    let base = logger.with_field("service", "stress");
    let rendered_bytes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let entry = base.with_field("thread", t);
            let rendered_bytes = Arc::clone(&rendered_bytes);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let line = entry
                        .emit(LogLevel::Info, format!("message {} from {}", i, t))
                        .expect("info is enabled");
                    rendered_bytes.fetch_add(line.len(), Ordering::SeqCst);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let writes = sink.writes();
    assert_eq!(writes.len(), THREADS * PER_THREAD);

    let total: usize = writes.iter().map(Vec::len).sum();
    assert_eq!(total, rendered_bytes.load(Ordering::SeqCst));

    for write in &writes {
        let text = std::str::from_utf8(write).expect("utf-8 write");
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1, "interleaved write: {:?}", text);
        assert!(text.starts_with("time=\""));
        assert!(text.contains("service=\"stress\""));
    }
}

#[test]
fn test_every_message_arrives_once() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .output(out.clone())
        .formatter(plain_formatter())
        .build();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    logger.infof(format_args!("t{}-m{}", t, i));
                }
            });
        }
    });

    let text = out.text();
    assert_eq!(text.lines().count(), THREADS * PER_THREAD);
    for t in 0..THREADS {
        for i in 0..PER_THREAD {
            let needle = format!("msg=\"t{}-m{}\"", t, i);
            assert_eq!(text.matches(&needle).count(), 1, "{} not logged once", needle);
        }
    }
}

#[test]
fn test_suppressed_levels_under_contention() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Error)
        .output(out.clone())
        .formatter(plain_formatter())
        .build();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let entry = logger.with_field("noise", true);
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    entry.debug(i);
                    entry.info(i);
                    if i % 50 == 0 {
                        entry.error(i);
                    }
                }
            });
        }
    });

    assert_eq!(out.lines().len(), THREADS * (PER_THREAD / 50));
    assert!(out.lines().iter().all(|l| l.contains("level=error")));
}

#[test]
fn test_concurrent_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("stress.log");
    let file = std::fs::File::create(&log_path).expect("Failed to create log file");

    let logger = Logger::builder()
        .output(std::io::BufWriter::new(file))
        .formatter(JsonFormatter::new())
        .build();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let entry = logger.with_field("thread", t);
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    entry.with_field("seq", i).warn("file stress");
                }
            });
        }
    });
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_path).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("each line is JSON");
        assert_eq!(parsed["level"], "warning");
    }
}
