//! Output Emitter
//!
//! Abstraction for output production during rendering.
//! Supports string building for in-memory formatting and streaming to any
//! [`io::Write`] sink.

use std::io::{self, Write};

use crate::config::FormatConfig;


/// Trait for emitting rendered output.
///
/// The renderer writes to an emitter component by component. Different
/// implementations support in-memory strings or streaming writers.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit the separator placed between two components.
    fn emit_separator(&mut self, config: &FormatConfig);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);
}

/// String-based emitter for in-memory formatting.
///
/// This is the emitter behind [`format_ip`](crate::format_ip).
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_separator(&mut self, config: &FormatConfig) {
        self.buffer.push(config.separator);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// Streaming emitter over any writer.
///
/// `emit` cannot fail, so the first write error is stored and every later
/// write is skipped. Call [`finish`](Self::finish) to observe it.
pub struct WriterEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterEmitter<W> {
    /// Create a new emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush the writer and return it, or the first error that occurred.
    ///
    /// # Errors
    ///
    /// Returns the first write error, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(bytes) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    fn emit_separator(&mut self, config: &FormatConfig) {
        let mut buf = [0u8; 4];
        let sep = config.separator.encode_utf8(&mut buf);
        self.write_bytes(sep.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write_bytes(b"\n");
    }
}
