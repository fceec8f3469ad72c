//! Mathgen Driver
//!
//! Runs every generation pass, in order, between a fixed prologue and
//! epilogue, and checks the result before handing it back.
//!
//! # Usage
//!
//! ```text
//! mathgen              # header to stdout
//! mathgen out/math.h   # header to a file
//! RUST_LOG=mathgen=debug mathgen out/math.h
//! ```

mod error;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Once;

use mathgen_emit::{Emitter, StringEmitter, WriteEmitter};
use mathgen_passes::{passes, GenContext, GenOutput};

pub use error::GenError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the generator.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mathgen=debug` or `RUST_LOG=mathgen_passes=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Compiled-in generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Written into the prologue comment.
    pub version: &'static str,
    /// Include-guard macro.
    pub guard: &'static str,
    /// Root namespace of the emitted library.
    pub namespace: &'static str,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            version: "3.4.0",
            guard: "MATH_H_INCLUDED",
            namespace: "Math",
        }
    }
}

/// Standard headers the emitted code uses.
const INCLUDES: &[&str] = &[
    "algorithm",
    "cctype",
    "cerrno",
    "cmath",
    "cstddef",
    "cstdint",
    "cstdio",
    "cstdlib",
    "cstring",
    "functional",
    "limits",
    "string",
    "type_traits",
    "utility",
];

fn prologue<E: Emitter>(cx: &mut GenContext<E>, config: &GenConfig) {
    mathgen_passes::out!(
        cx,
        "// Vector, matrix, and quaternion library, version ",
        config.version,
        "\n// Generated by mathgen. Do not edit.\n\n",
        "#ifndef ",
        config.guard,
        "\n#define ",
        config.guard,
        "\n\n"
    );
    for header in INCLUDES {
        mathgen_passes::out!(cx, "#include <", *header, ">\n");
    }
    cx.raw("\n");
}

fn epilogue<E: Emitter>(cx: &mut GenContext<E>, config: &GenConfig) {
    mathgen_passes::out!(cx, "#endif // ", config.guard, "\n");
}

/// Run the whole generation into `sink` and return it.
///
/// The sink receives text as it is produced, so on error it holds a
/// partial artifact.
pub fn generate_into<E: Emitter>(config: &GenConfig, sink: E) -> Result<E, GenError> {
    let mut cx = GenContext::new(sink, config.namespace);
    prologue(&mut cx, config);

    for pass in passes::<E>() {
        let _span = tracing::debug_span!("pass", name = pass.name).entered();
        let start = cx.sink().bytes_written();
        (pass.run)(&mut cx);
        tracing::debug!(
            bytes = cx.sink().bytes_written() - start,
            depth = cx.depth(),
            "pass finished"
        );
    }

    epilogue(&mut cx, config);
    let output = cx.finish();
    tracing::debug!(bytes = output.sink.bytes_written(), "artifact finished");
    check(output)
}

/// Reject an artifact whose braces do not balance or whose passes ran out
/// of order.
fn check<E>(output: GenOutput<E>) -> Result<E, GenError> {
    if !output.state.is_balanced() {
        return Err(GenError::Unbalanced {
            depth: output.state.depth,
            stray_closes: output.state.stray_closes,
        });
    }
    if !output.unresolved.is_empty() {
        return Err(GenError::Unresolved {
            names: output.unresolved,
        });
    }
    Ok(output.sink)
}

/// Generate the artifact as a string.
pub fn generate(config: &GenConfig) -> Result<String, GenError> {
    generate_into(config, StringEmitter::with_capacity(1 << 20)).map(StringEmitter::output)
}

/// Generate the artifact into `path`, or to stdout when no path is given.
pub fn write_artifact(config: &GenConfig, path: Option<&Path>) -> Result<(), GenError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| GenError::io(path, e))?;
            let sink = generate_into(config, WriteEmitter::new(file))?;
            let file = sink.finish().map_err(|e| GenError::io(path, e))?;
            file.sync_all().map_err(|e| GenError::io(path, e))
        }
        None => {
            let sink = generate_into(config, WriteEmitter::new(io::stdout().lock()))?;
            sink.finish()
                .map(drop)
                .map_err(|e| GenError::io("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use mathgen_emit::StringEmitter;
    use pretty_assertions::assert_eq;

    use super::*;

    fn checked(text: &str) -> Result<String, GenError> {
        let mut cx = GenContext::new(StringEmitter::new(), "Math");
        cx.raw(text);
        check(cx.finish()).map(StringEmitter::output)
    }

    #[test]
    fn balanced_text_passes() {
        assert_eq!(checked("{\n}\n").ok().as_deref(), Some("{\n}\n"));
    }

    #[test]
    fn open_brace_is_reported() {
        let err = checked("{\n{\n}\n").err();
        assert!(matches!(
            err,
            Some(GenError::Unbalanced {
                depth: 1,
                stray_closes: 0
            })
        ));
    }

    #[test]
    fn trailing_stray_close_is_reported() {
        let err = checked("{\n}\n}\n").err();
        assert!(matches!(
            err,
            Some(GenError::Unbalanced {
                depth: 0,
                stray_closes: 1
            })
        ));
    }

    #[test]
    fn out_of_order_names_are_reported() {
        let mut cx = GenContext::new(StringEmitter::new(), "Math");
        cx.require("quat");
        let names = match check(cx.finish()) {
            Err(GenError::Unresolved { names }) => names,
            _ => Vec::new(),
        };
        assert_eq!(names, ["quat"]);
    }
}
