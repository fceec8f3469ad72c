//! Free numeric functions usable on scalars and, slot by slot, on vectors
//! and matrices.

use mathgen_emit::Emitter;

use crate::{out, GenContext};

const APPLY: &str = "template <typename F, typename ...P> constexpr auto apply_elementwise(F &&func, const P &... params)
{
    constexpr int size = std::max({vec_size_v<P>...});
    if constexpr (size == 1)
    {
        return func(params...);
    }
    else
    {
        using R = std::decay_t<decltype(func(vec_elem(0, params)...))>;
        vec<size, R> ret(uninit);
        for (int i = 0; i < size; i++) ret[i] = func(vec_elem(i, params)...);
        return ret;
    }
}

";

/// A function with one scalar body; vector arguments recurse through
/// `apply_elementwise`.
struct Func {
    name: &'static str,
    params: &'static [&'static str],
    body: &'static str,
}

/// Template parameter of each positional argument.
const TYPES: [&str; 3] = ["A", "B", "C"];

const FUNCS: &[Func] = &[
    Func {
        name: "abs",
        params: &["a"],
        body: "return a < 0 ? -a : a;",
    },
    Func {
        name: "round",
        params: &["a"],
        body: "if constexpr (std::is_floating_point_v<A>) return std::round(a);\nelse return a;",
    },
    Func {
        name: "floor",
        params: &["a"],
        body: "if constexpr (std::is_floating_point_v<A>) return std::floor(a);\nelse return a;",
    },
    Func {
        name: "ceil",
        params: &["a"],
        body: "if constexpr (std::is_floating_point_v<A>) return std::ceil(a);\nelse return a;",
    },
    Func {
        name: "trunc",
        params: &["a"],
        body: "if constexpr (std::is_floating_point_v<A>) return std::trunc(a);\nelse return a;",
    },
    Func {
        name: "frac",
        params: &["a"],
        body: "return a - std::floor(a);",
    },
    Func {
        name: "sign",
        params: &["a"],
        body: "return A((a > 0) - (a < 0));",
    },
    Func {
        name: "min",
        params: &["a", "b"],
        body: "return b < a ? b : a;",
    },
    Func {
        name: "max",
        params: &["a", "b"],
        body: "return a < b ? b : a;",
    },
    Func {
        name: "clamp",
        params: &["a", "lo", "hi"],
        body: "return a < lo ? lo : hi < a ? hi : a;",
    },
    Func {
        name: "mix",
        params: &["a", "b", "t"],
        body: "return a * (1 - t) + b * t;",
    },
    Func {
        name: "smoothstep",
        params: &["lo", "hi", "a"],
        body: "auto t = clamp((a - lo) / (hi - lo), 0, 1);\nreturn t * t * (3 - 2 * t);",
    },
    Func {
        name: "pow",
        params: &["a", "b"],
        body: "return std::pow(a, b);",
    },
];

/// Boolean reductions that also accept plain scalars.
const REDUCTIONS: [(&str, &str); 3] = [
    ("any", "bool(a)"),
    ("all", "bool(a)"),
    ("none", "!bool(a)"),
];

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in ["vec", "vec_size_v", "vec_elem", "is_vector_v", "uninit"] {
        cx.require(name);
    }
    cx.banner("Misc");
    cx.open_section("Misc");

    cx.raw(APPLY);
    cx.declare("apply_elementwise");

    for f in FUNCS {
        function(cx, f);
        cx.declare(f.name);
    }

    for (name, scalar) in REDUCTIONS {
        out!(
            cx,
            "template <typename A> [[nodiscard]] constexpr bool ",
            name,
            "(const A &a)\n{\n",
            "if constexpr (is_vector_v<A>) return a.",
            name,
            "();\n",
            "else return ",
            scalar,
            ";\n}\n"
        );
        cx.declare(name);
    }

    cx.close_section();
}

fn function<E: Emitter>(cx: &mut GenContext<E>, f: &Func) {
    let types = &TYPES[..f.params.len()];
    let template = types
        .iter()
        .map(|t| format!("typename {t}"))
        .collect::<Vec<_>>()
        .join(", ");
    let params = types
        .iter()
        .zip(f.params)
        .map(|(t, p)| format!("{t} {p}"))
        .collect::<Vec<_>>()
        .join(", ");
    let any_vector = types
        .iter()
        .map(|t| format!("is_vector_v<{t}>"))
        .collect::<Vec<_>>()
        .join(" || ");
    let args = f.params.join(", ");

    out!(
        cx,
        "template <",
        &template,
        "> [[nodiscard]] constexpr auto ",
        f.name,
        "(",
        &params,
        ")\n{\n",
        "if constexpr (",
        &any_vector,
        ")\n{\n",
        "return apply_elementwise([](auto... v){return ",
        f.name,
        "(v...);}, ",
        &args,
        ");\n}\n",
        "else\n{\n",
        f.body,
        "\n}\n}\n\n"
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::passes::tests::{indent_of, section};

    #[test]
    fn params_fit_the_type_list() {
        for f in FUNCS {
            assert!(f.params.len() <= TYPES.len(), "{}", f.name);
        }
    }

    #[test]
    fn vectors_recurse_through_apply() {
        let text = section("misc");
        assert!(text.contains("template <typename A, typename B, typename C> [[nodiscard]] constexpr auto clamp(A a, B lo, C hi)"));
        assert!(text.contains("if constexpr (is_vector_v<A> || is_vector_v<B> || is_vector_v<C>)"));
        assert!(text.contains("return apply_elementwise([](auto... v){return clamp(v...);}, a, lo, hi);"));
        assert_eq!(text.matches("return apply_elementwise(").count(), FUNCS.len());
    }

    #[test]
    fn apply_broadcasts_scalars() {
        let text = section("misc");
        assert!(text.contains("constexpr int size = std::max({vec_size_v<P>...});"));
        assert!(text.contains("for (int i = 0; i < size; i++) ret[i] = func(vec_elem(i, params)...);"));
        assert_eq!(indent_of(&text, "using R = std::decay_t"), 16);
    }

    #[test]
    fn boolean_reductions_accept_scalars() {
        let text = section("misc");
        assert!(text.contains("if constexpr (is_vector_v<A>) return a.none();\n            else return !bool(a);"));
    }
}
