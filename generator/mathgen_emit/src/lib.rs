//! Mathgen Emission Core
//!
//! Text plumbing for the header generator.
//!
//! # Architecture
//!
//! ```text
//! pass ──(pieces)──▶ ScratchRing ──(token)──▶ IndentEmitter ──▶ Emitter sink
//! ```
//!
//! # Modules
//!
//! - [`scratch`]: ring of reusable buffers that stringifies heterogeneous pieces
//! - [`indent`]: brace- and marker-driven indentation
//! - [`emitter`]: sink abstraction for string and streaming output

pub mod emitter;
pub mod indent;
pub mod scratch;

pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use indent::{
    IndentEmitter, IndentState, DEDENT_MARKER, HALF_INDENT_MARKER, INDENT_WIDTH,
};
pub use scratch::{Piece, ScratchRing, Token, RING_CAPACITY, SLOT_SIZE};
