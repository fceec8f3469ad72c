#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::io::{self, Write};

use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("hello");
    emitter.emit_space();
    emitter.emit("world");
    assert_eq!(emitter.output(), "hello world");
}

#[test]
fn string_emitter_newline() {
    let mut emitter = StringEmitter::new();
    emitter.emit("line1");
    emitter.emit_newline();
    emitter.emit("line2");
    assert_eq!(emitter.output(), "line1\nline2");
}

#[test]
fn string_emitter_indent_counts_spaces() {
    let mut emitter = StringEmitter::new();
    emitter.emit_indent(6);
    emitter.emit("x");
    assert_eq!(emitter.output(), "      x");
}

#[test]
fn string_emitter_with_capacity() {
    let emitter = StringEmitter::with_capacity(1024);
    assert!(emitter.is_empty());
    assert_eq!(emitter.len(), 0);
}

#[test]
fn write_emitter_streams_to_writer() {
    let mut emitter = WriteEmitter::new(Vec::new());
    emitter.emit("struct");
    emitter.emit_space();
    emitter.emit("vec");
    emitter.emit_newline();
    emitter.emit_indent(40);
    emitter.emit("{");
    assert_eq!(emitter.bytes_written(), 52);
    let bytes = emitter.finish().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, format!("struct vec\n{}{{", " ".repeat(40)));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_emitter_reports_first_error() {
    let mut emitter = WriteEmitter::new(FailingWriter);
    // Larger than the BufWriter capacity so the write reaches the writer.
    emitter.emit(&"x".repeat(64 * 1024));
    emitter.emit("more");
    let err = emitter.finish().err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
