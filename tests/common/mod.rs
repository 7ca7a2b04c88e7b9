//! Test sinks shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_field_logger::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Accumulates everything written to it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is utf-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records every `write` call separately, so tests can check that one entry
/// arrives as one uninterrupted write.
#[derive(Clone, Default)]
pub struct RecordingSink(Arc<Mutex<Vec<Vec<u8>>>>);

impl RecordingSink {
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.0.lock().clone()
    }
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn never_terminal() -> bool {
    false
}

/// Plain text formatter that ignores whether the test runner has a terminal.
pub fn plain_formatter() -> TextFormatter {
    TextFormatter::new().with_terminal_check(never_terminal)
}

/// Logger writing plain text into a fresh buffer, with a no-op exit handler.
pub fn buffered_logger(level: LogLevel) -> (Logger, SharedBuffer) {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .min_level(level)
        .output(out.clone())
        .formatter(plain_formatter())
        .exit_handler(Arc::new(|_| {}))
        .build();
    (logger, out)
}
