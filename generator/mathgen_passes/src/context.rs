//! Generation context and state.
//!
//! The `GenContext` owns the scratch ring and the indentation emitter for the
//! whole run, plus the set of names earlier passes have introduced.

use mathgen_emit::{Emitter, IndentEmitter, IndentState, Piece, ScratchRing, Token};
use rustc_hash::FxHashSet;

/// Generation context.
///
/// Every pass writes through one of these; passes share nothing else.
pub struct GenContext<E: Emitter> {
    ring: ScratchRing,
    out: IndentEmitter<E>,
    /// Root namespace of the emitted library.
    namespace: &'static str,
    /// Names introduced so far, for ordering checks.
    declared: FxHashSet<String>,
    /// Names referenced before any pass declared them.
    unresolved: Vec<String>,
}

/// What a finished run leaves behind.
pub struct GenOutput<E> {
    pub state: IndentState,
    pub sink: E,
    pub unresolved: Vec<String>,
}

impl<E: Emitter> GenContext<E> {
    /// Create a new generation context writing to `sink`.
    pub fn new(sink: E, namespace: &'static str) -> Self {
        Self {
            ring: ScratchRing::new(),
            out: IndentEmitter::new(sink),
            namespace,
            declared: FxHashSet::default(),
            unresolved: Vec::new(),
        }
    }

    /// Format pieces into a scratch token without emitting it.
    pub fn make(&mut self, pieces: &[Piece<'_>]) -> Token {
        self.ring.make(pieces)
    }

    /// Text of a live scratch token.
    pub fn text(&self, token: Token) -> &str {
        self.ring.resolve(token)
    }

    /// Format pieces and feed the result to the emitter.
    pub fn out(&mut self, pieces: &[Piece<'_>]) {
        let token = self.ring.make(pieces);
        self.out.feed(self.ring.resolve(token));
    }

    /// Feed already-built text.
    pub fn raw(&mut self, text: &str) {
        self.out.feed(text);
    }

    /// Current brace depth.
    pub fn depth(&self) -> usize {
        self.out.depth()
    }

    /// Output written so far.
    pub fn sink(&self) -> &E {
        self.out.sink()
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Open `namespace <root> { inline namespace <name> {`.
    pub fn open_section(&mut self, name: &str) {
        let root = self.namespace;
        self.out(&mathgen_emit::pieces![
            "namespace ",
            root,
            "\n{\ninline namespace ",
            name,
            "\n{\n"
        ]);
    }

    /// Close what [`GenContext::open_section`] opened.
    pub fn close_section(&mut self) {
        self.raw("}\n}\n\n");
    }

    /// Banner comment separating passes.
    pub fn banner(&mut self, title: &str) {
        self.out(&mathgen_emit::pieces![
            "// ",
            "=".repeat(76).as_str(),
            "\n// ",
            title,
            "\n// ",
            "=".repeat(76).as_str(),
            "\n\n"
        ]);
    }

    /// Record that the output now defines `name`.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.declared.insert(name.into());
    }

    /// Record that the output is about to reference `name`.
    pub fn require(&mut self, name: &str) {
        if !self.declared.contains(name) {
            tracing::warn!(name, "referenced before declaration");
            self.unresolved.push(name.to_owned());
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Finish the run.
    pub fn finish(self) -> GenOutput<E> {
        let (state, sink) = self.out.finish();
        GenOutput {
            state,
            sink,
            unresolved: self.unresolved,
        }
    }
}

/// Format pieces straight into a context's emitter: `out!(cx, "vec", d, "\n")`.
#[macro_export]
macro_rules! out {
    ($cx:expr, $($piece:expr),+ $(,)?) => {
        $cx.out(&mathgen_emit::pieces![$($piece),+])
    };
}

#[cfg(test)]
mod tests {
    use mathgen_emit::{make, StringEmitter};
    use pretty_assertions::assert_eq;

    use super::*;

    fn cx() -> GenContext<StringEmitter> {
        GenContext::new(StringEmitter::new(), "Math")
    }

    #[test]
    fn out_formats_then_indents() {
        let mut cx = cx();
        out!(cx, "struct vec", 2, "\n{\n", "int x;\n", "};\n");
        let output = cx.finish();
        assert_eq!(output.sink.output(), "struct vec2\n{\n    int x;\n};\n");
        assert_eq!(output.state.depth, 0);
    }

    #[test]
    fn nested_tokens_compose() {
        let mut cx = cx();
        let ty = make!(cx, "vec", 3, "<T>");
        out!(cx, "using type = ", ty, ";\n");
        assert_eq!(cx.text(ty), "vec3<T>");
        assert_eq!(cx.finish().sink.output(), "using type = vec3<T>;\n");
    }

    #[test]
    fn sections_balance() {
        let mut cx = cx();
        cx.open_section("Vector");
        assert_eq!(cx.depth(), 2);
        cx.raw("int x;\n");
        cx.close_section();
        assert_eq!(cx.depth(), 0);
        assert_eq!(
            cx.finish().sink.output(),
            "namespace Math\n{\n    inline namespace Vector\n    {\n        int x;\n    }\n}\n\n"
        );
    }

    #[test]
    fn require_tracks_missing_names() {
        let mut cx = cx();
        cx.declare("vec");
        cx.require("vec");
        cx.require("quat");
        assert!(cx.is_declared("vec"));
        assert_eq!(cx.finish().unresolved, ["quat"]);
    }

    #[test]
    fn banner_is_a_comment_block() {
        let mut cx = cx();
        cx.banner("Vectors");
        let text = cx.finish().sink.output();
        assert!(text.lines().all(|l| l.is_empty() || l.starts_with("// ")));
        assert!(text.contains("// Vectors\n"));
    }
}
