//! Indentation Emitter
//!
//! Turns loosely-formatted fragments into consistently indented output.
//! Only brace structure and two marker characters drive indentation. Spaces
//! and tabs at the start of a line are dropped, so fragments may be authored
//! with whatever leading whitespace reads best in the generator source.
//!
//! | input | effect |
//! |---|---|
//! | `\n` | write the line break, mark indentation pending |
//! | `{` | flush pending indentation, then increase depth, then write `{` |
//! | `}` | decrease depth, then flush pending indentation, then write `}` |
//!
//! A `}` at depth zero is still written, at column zero; it is counted in
//! [`IndentState::stray_closes`] so callers can report the imbalance.
//! | [`DEDENT_MARKER`] | flush pending indentation two columns left; the marker is consumed |
//! | [`HALF_INDENT_MARKER`] | if pending, flush one level left and write a single space |
//! | space or tab at line start | dropped |
//! | anything else | flush pending indentation, then write the character |

use crate::emitter::Emitter;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Pulls the following text two columns left of normal indentation.
pub const DEDENT_MARKER: char = '@';

/// Pulls a continuation row one level left, keeping a separating space.
pub const HALF_INDENT_MARKER: char = '$';

/// Nesting depth and pending-newline flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentState {
    pub depth: usize,
    pub pending_newline: bool,
    /// Closing braces seen with nothing open.
    pub stray_closes: usize,
}

impl IndentState {
    /// Whether every brace opened so far was closed, and none extra.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.stray_closes == 0
    }
}

impl Default for IndentState {
    /// Start of output counts as the start of a line.
    fn default() -> Self {
        Self {
            depth: 0,
            pending_newline: true,
            stray_closes: 0,
        }
    }
}

/// Emitter that indents by brace depth.
pub struct IndentEmitter<E: Emitter> {
    state: IndentState,
    sink: E,
}

impl<E: Emitter> IndentEmitter<E> {
    pub fn new(sink: E) -> Self {
        Self {
            state: IndentState::default(),
            sink,
        }
    }

    /// Current indentation state.
    pub fn state(&self) -> IndentState {
        self.state
    }

    /// Current brace depth.
    pub fn depth(&self) -> usize {
        self.state.depth
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Consume the emitter, returning the final state and the sink.
    pub fn finish(self) -> (IndentState, E) {
        (self.state, self.sink)
    }

    /// Feed one fragment.
    pub fn feed(&mut self, fragment: &str) {
        let mut rest = fragment;
        while let Some(pos) = rest.find(is_structural) {
            let (plain, tail) = rest.split_at(pos);
            self.plain(plain);
            let mut chars = tail.chars();
            let Some(c) = chars.next() else {
                break;
            };
            self.structural(c);
            rest = chars.as_str();
        }
        self.plain(rest);
    }

    fn plain(&mut self, text: &str) {
        let text = if self.state.pending_newline {
            text.trim_start_matches([' ', '\t'])
        } else {
            text
        };
        if text.is_empty() {
            return;
        }
        self.flush_indent(0);
        self.sink.emit(text);
    }

    fn structural(&mut self, c: char) {
        match c {
            '\n' => {
                self.sink.emit_newline();
                self.state.pending_newline = true;
            }
            '{' => {
                self.flush_indent(0);
                self.state.depth += 1;
                self.sink.emit("{");
            }
            '}' => {
                match self.state.depth.checked_sub(1) {
                    Some(depth) => self.state.depth = depth,
                    None => self.state.stray_closes += 1,
                }
                self.flush_indent(0);
                self.sink.emit("}");
            }
            DEDENT_MARKER => {
                self.flush_indent(2);
            }
            HALF_INDENT_MARKER => {
                if self.flush_indent(INDENT_WIDTH) {
                    self.sink.emit_space();
                }
            }
            _ => unreachable!("is_structural admitted {c:?}"),
        }
    }

    /// Write pending indentation, `outdent` columns left of the depth.
    ///
    /// Returns whether anything was pending.
    fn flush_indent(&mut self, outdent: usize) -> bool {
        if !self.state.pending_newline {
            return false;
        }
        self.state.pending_newline = false;
        let spaces = (self.state.depth * INDENT_WIDTH).saturating_sub(outdent);
        if spaces > 0 {
            self.sink.emit_indent(spaces);
        }
        true
    }
}

fn is_structural(c: char) -> bool {
    matches!(c, '\n' | '{' | '}' | DEDENT_MARKER | HALF_INDENT_MARKER)
}
