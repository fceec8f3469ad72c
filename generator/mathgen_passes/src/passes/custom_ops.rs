//! Named binary operations written infix: `a /dot/ b`.
//!
//! The left operand and the operation tag fold into a pending expression
//! that dispatches to the member function of the same name once the right
//! operand arrives. The delimiter binds like multiplication, so mixed
//! arithmetic keeps its usual grouping.
//!
//! Both helper types carry `custom_op_tag`, which keeps them out of the
//! vector-scalar operator overloads.

use mathgen_emit::Emitter;
use mathgen_tables::{CUSTOM_OPS, CUSTOM_OP_DELIM};

use crate::{out, GenContext};

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    cx.require("is_custom_op_v");
    cx.banner("Custom operators");
    cx.open_section("CustomOperators");

    let op = CUSTOM_OP_DELIM;
    for name in CUSTOM_OPS {
        out!(
            cx,
            "struct op_type_",
            *name,
            " {using custom_op_tag = void;};\n",
            "template <typename A> struct op_expr_type_",
            *name,
            "\n{\nusing custom_op_tag = void;\nA &&a;\n};\n",
            "template <typename A> [[nodiscard]] constexpr op_expr_type_",
            *name,
            "<A> operator",
            op,
            "(A &&a, op_type_",
            *name,
            ") {return {std::forward<A>(a)};}\n",
            "template <typename A, typename B> [[nodiscard]] constexpr auto operator",
            op,
            "(op_expr_type_",
            *name,
            "<A> &&a, B &&b) {return std::forward<A>(a.a).",
            *name,
            "(std::forward<B>(b));}\n",
            "inline constexpr op_type_",
            *name,
            " ",
            *name,
            "{};\n\n"
        );
    }
    cx.declare("CustomOperators");

    cx.close_section();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::passes::tests::section;

    #[test]
    fn every_operation_gets_a_tag_and_dispatch() {
        let text = section("custom_ops");
        for name in ["dot", "cross", "mul"] {
            assert!(text.contains(&format!("inline constexpr op_type_{name} {name}{{}};")));
            assert!(text.contains(&format!("return std::forward<A>(a.a).{name}(std::forward<B>(b));")));
        }
        assert_eq!(text.matches("operator/(").count(), 6);
    }

    #[test]
    fn helper_types_are_tagged() {
        let text = section("custom_ops");
        assert!(text.contains("struct op_type_dot {using custom_op_tag = void;};"));
        assert!(text.contains("struct op_expr_type_cross\n        {\n            using custom_op_tag = void;\n            A &&a;\n        };"));
    }
}
