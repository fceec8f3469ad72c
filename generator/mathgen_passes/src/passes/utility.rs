//! Type-level helpers the entity definitions and free functions build on.

use mathgen_emit::Emitter;

use crate::{out, GenContext};

/// A trait answering one question about `vec` instantiations.
struct Trait {
    name: &'static str,
    value: &'static str,
    fallback: &'static str,
    params: &'static str,
    pattern: &'static str,
    matched: &'static str,
}

const TRAITS: &[Trait] = &[
    Trait {
        name: "is_vector",
        value: "bool",
        fallback: "false",
        params: "int D, typename T",
        pattern: "vec<D, T>",
        matched: "true",
    },
    Trait {
        name: "is_matrix",
        value: "bool",
        fallback: "false",
        params: "int W, int H, typename T",
        pattern: "vec<W, vec<H, T>>",
        matched: "true",
    },
    Trait {
        name: "vec_size",
        value: "int",
        fallback: "1",
        params: "int D, typename T",
        pattern: "vec<D, T>",
        matched: "D",
    },
];

const UNINIT: &str = "struct uninit_t {explicit uninit_t() = default;};
inline constexpr uninit_t uninit{};

";

const TYPE_OPS: &str = "template <typename T> struct vec_base_impl {using type = T;};
template <int D, typename T> struct vec_base_impl<vec<D, T>> {using type = typename vec_base_impl<T>::type;};
template <typename T> using vec_base_t = typename vec_base_impl<T>::type;

template <typename T, typename B> struct change_vec_base_impl {using type = B;};
template <int D, typename T, typename B> struct change_vec_base_impl<vec<D, T>, B>
{
    using type = vec<D, typename change_vec_base_impl<T, B>::type>;
};
template <typename T, typename B> using change_vec_base_t = typename change_vec_base_impl<T, B>::type;

template <typename ...P> using larger_t = std::common_type_t<P...>;

template <typename T> using floating_point_t = std::conditional_t<std::is_floating_point_v<vec_base_t<T>>, T, change_vec_base_t<T, double>>;

template <typename T, typename = void> struct is_custom_op_impl : std::false_type {};
template <typename T> struct is_custom_op_impl<T, std::void_t<typename T::custom_op_tag>> : std::true_type {};
template <typename T> inline constexpr bool is_custom_op_v = is_custom_op_impl<std::remove_cv_t<std::remove_reference_t<T>>>::value;

template <typename T> using scalar_only_t = std::enable_if_t<!is_vector_v<T> && !is_custom_op_v<T>, std::nullptr_t>;

template <typename T> [[nodiscard]] constexpr decltype(auto) vec_elem(int i, const T &value)
{
    if constexpr (is_vector_v<T>) return value[i];
    else return value;
}
";

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    cx.require("vec");
    cx.banner("Utility");
    cx.open_section("Utility");

    cx.raw(UNINIT);
    cx.declare("uninit_t");
    cx.declare("uninit");

    for t in TRAITS {
        out!(
            cx,
            "template <typename T> struct ",
            t.name,
            "_impl : std::integral_constant<",
            t.value,
            ", ",
            t.fallback,
            "> {};\n",
            "template <",
            t.params,
            "> struct ",
            t.name,
            "_impl<",
            t.pattern,
            "> : std::integral_constant<",
            t.value,
            ", ",
            t.matched,
            "> {};\n",
            "template <typename T> inline constexpr ",
            t.value,
            " ",
            t.name,
            "_v = ",
            t.name,
            "_impl<std::remove_cv_t<std::remove_reference_t<T>>>::value;\n\n"
        );
        cx.declare(format!("{}_v", t.name));
    }

    cx.raw(TYPE_OPS);
    for name in [
        "vec_base_t",
        "change_vec_base_t",
        "larger_t",
        "floating_point_t",
        "is_custom_op_v",
        "scalar_only_t",
        "vec_elem",
    ] {
        cx.declare(name);
    }

    cx.close_section();
}

#[cfg(test)]
mod tests {
    use crate::passes::tests::{indent_of, section};

    #[test]
    fn traits_strip_references() {
        let text = section("utility");
        for name in ["is_vector_v", "is_matrix_v", "vec_size_v"] {
            assert!(text.contains(&format!(
                "{name} = {}_impl<std::remove_cv_t<std::remove_reference_t<T>>>::value;",
                name.trim_end_matches("_v")
            )));
        }
        assert!(text.contains("struct vec_size_impl<vec<D, T>> : std::integral_constant<int, D> {};"));
    }

    #[test]
    fn matrices_are_vectors_of_vectors() {
        let text = section("utility");
        assert!(text.contains("struct is_matrix_impl<vec<W, vec<H, T>>> : std::integral_constant<bool, true> {};"));
    }

    #[test]
    fn custom_op_operands_are_not_scalars() {
        let text = section("utility");
        assert!(text.contains("struct is_custom_op_impl<T, std::void_t<typename T::custom_op_tag>> : std::true_type {};"));
        assert!(text.contains("std::enable_if_t<!is_vector_v<T> && !is_custom_op_v<T>, std::nullptr_t>;"));
    }

    #[test]
    fn block_bodies_are_indented() {
        let text = section("utility");
        assert_eq!(indent_of(&text, "struct uninit_t"), 8);
        assert_eq!(indent_of(&text, "using type = vec<D, typename change_vec_base_impl"), 12);
        assert_eq!(indent_of(&text, "if constexpr (is_vector_v<T>) return value[i];"), 12);
    }
}
