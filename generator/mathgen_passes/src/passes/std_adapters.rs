//! `std::less` and `std::hash` specializations, so entities work as keys of
//! ordered and unordered containers.

use mathgen_emit::Emitter;
use mathgen_tables::{dims, fields};

use crate::{out, GenContext};

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in ["vec2", "vec3", "vec4", "quat"] {
        cx.require(name);
    }
    let root = cx.namespace();
    cx.banner("Standard library adapters");
    cx.raw("namespace std\n{\n");

    for d in dims() {
        let ty = format!("{root}::vec{d}<T>");
        less(cx, d, &ty);
        hash(cx, d, &ty);
    }

    out!(
        cx,
        "template <typename T> struct less<",
        root,
        "::quat<T>>\n{\n",
        "using result_type = bool;\n",
        "constexpr bool operator()(const ",
        root,
        "::quat<T> &a, const ",
        root,
        "::quat<T> &b) const {return less<",
        root,
        "::vec4<T>>{}(a.as_vec(), b.as_vec());}\n",
        "};\n\n",
        "template <typename T> struct hash<",
        root,
        "::quat<T>>\n{\n",
        "std::size_t operator()(const ",
        root,
        "::quat<T> &q) const {return hash<",
        root,
        "::vec4<T>>{}(q.as_vec());}\n",
        "};\n"
    );

    cx.raw("}\n\n");
}

/// Lexicographic over slots; members compare through `less` of their own
/// type, so matrices compare column by column.
fn less<E: Emitter>(cx: &mut GenContext<E>, d: usize, ty: &str) {
    out!(
        cx,
        "template <typename T> struct less<",
        ty,
        ">\n{\n",
        "using result_type = bool;\n",
        "constexpr bool operator()(const ",
        ty,
        " &a, const ",
        ty,
        " &b) const\n{\n"
    );
    let slots = fields(d);
    for s in &slots[..d - 1] {
        out!(
            cx,
            "if (less<T>{}(a.",
            *s,
            ", b.",
            *s,
            ")) return true;\n",
            "if (less<T>{}(b.",
            *s,
            ", a.",
            *s,
            ")) return false;\n"
        );
    }
    let last = slots[d - 1];
    out!(cx, "return less<T>{}(a.", last, ", b.", last, ");\n}\n};\n\n");
}

/// Boost-style hash combine over slots.
fn hash<E: Emitter>(cx: &mut GenContext<E>, d: usize, ty: &str) {
    out!(
        cx,
        "template <typename T> struct hash<",
        ty,
        ">\n{\n",
        "std::size_t operator()(const ",
        ty,
        " &v) const\n{\n",
        "std::size_t ret = hash<T>{}(v.x);\n"
    );
    for s in &fields(d)[1..] {
        out!(
            cx,
            "ret ^= hash<T>{}(v.",
            *s,
            ") + 0x9e3779b9 + (ret << 6) + (ret >> 2);\n"
        );
    }
    cx.raw("return ret;\n}\n};\n\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::passes::tests::{indent_of, section};

    #[test]
    fn less_is_lexicographic() {
        let text = section("std_adapters");
        assert!(text.contains("template <typename T> struct less<Math::vec3<T>>\n"));
        let expected = "if (less<T>{}(a.x, b.x)) return true;
            if (less<T>{}(b.x, a.x)) return false;
            if (less<T>{}(a.y, b.y)) return true;
            if (less<T>{}(b.y, a.y)) return false;
            return less<T>{}(a.z, b.z);";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn hash_combines_every_slot() {
        let text = section("std_adapters");
        assert_eq!(text.matches("0x9e3779b9").count(), 1 + 2 + 3);
        assert!(text.contains("return hash<Math::vec4<T>>{}(q.as_vec());"));
    }

    #[test]
    fn adapters_live_in_std() {
        let text = section("std_adapters");
        assert_eq!(indent_of(&text, "namespace std"), 0);
        assert_eq!(indent_of(&text, "using result_type = bool;"), 8);
    }
}
