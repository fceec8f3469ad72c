//! Free operator overloads for every vector size.
//!
//! Matrices are vectors of vectors, so each overload also covers every
//! matrix whose width matches, recursing into the columns.

use mathgen_emit::Emitter;
use mathgen_tables::operators::{
    compound_base, BINARY_OPS, BOOL_BINARY_OPS, BOOL_UNARY_OPS, COMPARISON_OPS, COMPOUND_OPS,
    EQUALITY_OPS, INC_DEC_OPS, UNARY_OPS,
};
use mathgen_tables::{dims, fields};

use crate::{out, GenContext};

/// Which operands of a binary overload are vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    VecVec,
    VecScalar,
    ScalarVec,
}

const FORMS: [Form; 3] = [Form::VecVec, Form::VecScalar, Form::ScalarVec];

impl Form {
    fn template(self) -> &'static str {
        match self {
            Form::VecVec => "template <typename A, typename B>",
            Form::VecScalar => "template <typename A, typename B, scalar_only_t<B> = nullptr>",
            Form::ScalarVec => "template <typename A, typename B, scalar_only_t<A> = nullptr>",
        }
    }

    fn params(self, d: usize) -> String {
        match self {
            Form::VecVec => format!("const vec{d}<A> &a, const vec{d}<B> &b"),
            Form::VecScalar => format!("const vec{d}<A> &a, const B &b"),
            Form::ScalarVec => format!("const A &a, const vec{d}<B> &b"),
        }
    }

    /// Operands for slot `s`.
    fn operands(self, s: &str) -> (String, String) {
        match self {
            Form::VecVec => (format!("a.{s}"), format!("b.{s}")),
            Form::VecScalar => (format!("a.{s}"), "b".to_owned()),
            Form::ScalarVec => ("a".to_owned(), format!("b.{s}")),
        }
    }
}

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in ["vec2", "vec3", "vec4", "scalar_only_t"] {
        cx.require(name);
    }
    cx.banner("Operators");
    cx.open_section("Operators");

    for d in dims() {
        tracing::trace!(dim = d, "operators");
        out!(cx, "// vec", d, "\n");
        for op in BINARY_OPS.iter().chain(COMPARISON_OPS) {
            elementwise(cx, d, op);
        }
        for op in EQUALITY_OPS {
            equality(cx, d, op);
        }
        for op in UNARY_OPS {
            unary(cx, d, op);
        }
        for op in BOOL_UNARY_OPS {
            out!(
                cx,
                "template <typename A> [[nodiscard]] constexpr bool operator",
                *op,
                "(const vec",
                d,
                "<A> &a) {return ",
                *op,
                "bool(a);}\n"
            );
        }
        for op in BOOL_BINARY_OPS {
            for form in FORMS {
                out!(
                    cx,
                    form.template(),
                    " [[nodiscard]] constexpr bool operator",
                    *op,
                    "(",
                    &form.params(d),
                    ") {return bool(a) ",
                    *op,
                    " bool(b);}\n"
                );
            }
        }
        for op in INC_DEC_OPS {
            increment(cx, d, op);
        }
        for op in COMPOUND_OPS {
            out!(
                cx,
                "template <typename A, typename B> constexpr vec",
                d,
                "<A> &operator",
                *op,
                "(vec",
                d,
                "<A> &a, const B &b) {a = vec",
                d,
                "<A>(a ",
                compound_base(op),
                " b); return a;}\n"
            );
        }
        cx.raw("\n");
    }

    cx.close_section();
}

/// Slot-wise binary operator; comparisons produce boolean vectors.
fn elementwise<E: Emitter>(cx: &mut GenContext<E>, d: usize, op: &str) {
    for form in FORMS {
        let slots = fields(d)
            .iter()
            .map(|s| {
                let (a, b) = form.operands(s);
                format!("{a} {op} {b}")
            })
            .collect::<Vec<_>>();
        out!(
            cx,
            form.template(),
            " [[nodiscard]] constexpr auto operator",
            op,
            "(",
            &form.params(d),
            ") -> vec",
            d,
            "<decltype(",
            &slots[0],
            ")> {return {",
            &slots.join(", "),
            "};}\n"
        );
    }
}

/// Whole-operand equality: one `bool`, not a vector of them.
fn equality<E: Emitter>(cx: &mut GenContext<E>, d: usize, op: &str) {
    let joiner = if op == "==" { " && " } else { " || " };
    let body = fields(d)
        .iter()
        .map(|s| format!("a.{s} {op} b.{s}"))
        .collect::<Vec<_>>()
        .join(joiner);
    out!(
        cx,
        "template <typename A, typename B> [[nodiscard]] constexpr bool operator",
        op,
        "(const vec",
        d,
        "<A> &a, const vec",
        d,
        "<B> &b) {return ",
        &body,
        ";}\n"
    );
}

fn unary<E: Emitter>(cx: &mut GenContext<E>, d: usize, op: &str) {
    let slots = fields(d).iter().map(|s| format!("{op}a.{s}")).collect::<Vec<_>>();
    out!(
        cx,
        "template <typename A> [[nodiscard]] constexpr auto operator",
        op,
        "(const vec",
        d,
        "<A> &a) -> vec",
        d,
        "<decltype(",
        &slots[0],
        ")> {return {",
        &slots.join(", "),
        "};}\n"
    );
}

fn increment<E: Emitter>(cx: &mut GenContext<E>, d: usize, op: &str) {
    let each = fields(d).iter().map(|s| format!("{op}a.{s};")).collect::<Vec<_>>().join(" ");
    out!(
        cx,
        "template <typename A> constexpr vec",
        d,
        "<A> &operator",
        op,
        "(vec",
        d,
        "<A> &a) {",
        &each,
        " return a;}\n",
        "template <typename A> constexpr vec",
        d,
        "<A> operator",
        op,
        "(vec",
        d,
        "<A> &a, int) {vec",
        d,
        "<A> ret = a; ",
        op,
        "a; return ret;}\n"
    );
}
