//! Output Emitter
//!
//! Abstraction for the artifact sink.
//! Supports string building for in-memory generation and streaming to any writer.

use std::io::{self, BufWriter, Write};

/// Trait for the destination of generated text.
///
/// The indentation emitter writes to a sink. Different implementations
/// support in-memory strings, files, stdout, or other destinations.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a single space.
    fn emit_space(&mut self);

    /// Bytes accepted so far.
    fn bytes_written(&self) -> usize;
}

/// String-based sink for in-memory generation.
///
/// This is the sink used by tests and by callers that want the artifact
/// as a value.
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

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }

    fn bytes_written(&self) -> usize {
        self.buffer.len()
    }
}

/// Streaming sink over any [`Write`] implementation.
///
/// Uses buffered writing. The first write error is kept and every later
/// write is skipped; callers observe it through [`WriteEmitter::finish`].
pub struct WriteEmitter<W: Write> {
    writer: BufWriter<W>,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> WriteEmitter<W> {
    /// Create a new emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            error: None,
            written: 0,
        }
    }

    /// Finish writing and return the inner writer.
    ///
    /// # Errors
    ///
    /// Returns the first error seen during emission, or the error from the
    /// final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.into_inner().map_err(io::IntoInnerError::into_error)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        match self.writer.write_all(bytes) {
            Ok(()) => self.written += bytes.len(),
            Err(err) => self.error = Some(err),
        }
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write_bytes(b"\n");
    }

    fn emit_indent(&mut self, spaces: usize) {
        const SPACES: &[u8; 32] = b"                                ";
        let mut left = spaces;
        while left > 0 {
            let chunk = left.min(SPACES.len());
            self.write_bytes(&SPACES[..chunk]);
            left -= chunk;
        }
    }

    fn emit_space(&mut self) {
        self.write_bytes(b" ");
    }

    fn bytes_written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests;
