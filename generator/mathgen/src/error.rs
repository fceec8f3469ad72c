//! Driver errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a run produced no usable artifact.
#[derive(Debug, Error)]
pub enum GenError {
    /// Creating, writing, or flushing the output failed.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Braces in the emitted text do not balance.
    #[error("emitted text ends at brace depth {depth} with {stray_closes} unmatched closing braces")]
    Unbalanced { depth: usize, stray_closes: usize },

    /// A pass referenced names that no earlier pass emitted.
    #[error("referenced before declaration: {}", names.join(", "))]
    Unresolved { names: Vec<String> },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
