//! Forward declarations of the core generic types and their short aliases.

use mathgen_emit::Emitter;
use mathgen_tables::{dims, mat_shapes, Entity};

use crate::{out, GenContext};

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    cx.banner("Prototypes");

    cx.open_section("Vector");
    cx.raw("template <int D, typename T> struct vec;\n");
    cx.raw("template <int W, int H, typename T> using mat = vec<W, vec<H, T>>;\n\n");
    cx.declare("vec");
    cx.declare("mat");

    for d in dims() {
        out!(cx, "template <typename T> using vec", d, " = vec<", d, ", T>;\n");
        cx.declare(Entity::Vector(d).alias());
    }
    cx.raw("\n");
    for (w, h) in mat_shapes() {
        out!(cx, "template <typename T> using mat", w, "x", h, " = mat<", w, ", ", h, ", T>;\n");
        cx.declare(Entity::Matrix { w, h }.alias());
    }
    cx.raw("\n");
    for d in dims() {
        out!(cx, "template <typename T> using mat", d, " = mat", d, "x", d, "<T>;\n");
        cx.declare(format!("mat{d}"));
    }
    cx.close_section();

    cx.open_section("Quaternion");
    cx.raw("template <typename T> struct quat;\n");
    cx.declare("quat");
    cx.close_section();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::passes::tests::section;

    #[test]
    fn every_shape_gets_an_alias() {
        let text = section("prototypes");
        assert_eq!(text.matches("template <typename T> using vec").count(), 3);
        assert_eq!(text.matches("template <typename T> using mat").count(), 9 + 3);
        assert!(text.contains("        template <typename T> using mat2x4 = mat<2, 4, T>;\n"));
        assert!(text.contains("        template <typename T> using mat3 = mat3x3<T>;\n"));
    }

    #[test]
    fn quaternion_is_forward_declared() {
        let text = section("prototypes");
        assert!(text.contains("inline namespace Quaternion\n    {\n        template <typename T> struct quat;\n"));
    }
}
