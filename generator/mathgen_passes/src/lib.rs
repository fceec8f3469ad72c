//! Mathgen Generation Passes
//!
//! Expands the constant tables into the text of the math header. Each pass
//! writes one section through a shared [`GenContext`]; passes run in the
//! fixed order of [`passes`] because later sections name types and
//! functions introduced by earlier ones.
//!
//! # Architecture
//!
//! ```text
//! Constant Tables ─▶ Pass ─(pieces)─▶ GenContext { ScratchRing ─▶ IndentEmitter } ─▶ sink
//! ```

pub mod algebra;
mod context;
pub mod passes;
pub mod render;

pub use context::{GenContext, GenOutput};
pub use passes::{passes, Pass};
