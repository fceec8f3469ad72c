//! Vector-only members: lengths, products, normalization, resizing.

use mathgen_emit::Emitter;
use mathgen_tables::{dims, fields, shapes::vector_resize, Entity};

use crate::render::{fill_value, params, type_name};
use crate::{out, GenContext};

pub fn members<E: Emitter>(cx: &mut GenContext<E>, d: usize) {
    let slots = fields(d);
    let other = type_name(Entity::Vector(d), "TT");
    let squares = slots.iter().map(|s| format!("{s} * {s}")).collect::<Vec<_>>().join(" + ");
    let dot = slots.iter().map(|s| format!("{s} * o.{s}")).collect::<Vec<_>>().join(" + ");

    out!(cx, "[[nodiscard]] constexpr auto len_sqr() const {return ", &squares, ";}\n");
    cx.raw("[[nodiscard]] auto len() const {return std::sqrt(len_sqr());}\n");
    out!(
        cx,
        "template <typename TT> [[nodiscard]] constexpr auto dot(const ",
        &other,
        " &o) const {return ",
        &dot,
        ";}\n"
    );

    match d {
        2 => out!(
            cx,
            "template <typename TT> [[nodiscard]] constexpr auto cross(const ",
            &other,
            " &o) const {return x * o.y - y * o.x;}\n"
        ),
        3 => out!(
            cx,
            "template <typename TT> [[nodiscard]] constexpr auto cross(const ",
            &other,
            " &o) const -> vec3<decltype(x * o.x - x * o.x)>\n{\n",
            "return {y * o.z - z * o.y, z * o.x - x * o.z, x * o.y - y * o.x};\n}\n"
        ),
        _ => {}
    }

    // A zero vector normalizes to itself.
    let unit = type_name(Entity::Vector(d), "floating_point_t<T>");
    let scaled = slots.iter().map(|s| format!("{s} / l")).collect::<Vec<_>>().join(", ");
    out!(
        cx,
        "[[nodiscard]] ",
        &unit,
        " norm() const\n{\n",
        "auto l = len();\n",
        "if (l == 0) return ",
        &unit,
        "(0);\n",
        "return {",
        &scaled,
        "};\n}\n"
    );

    if d == 2 {
        cx.raw("[[nodiscard]] constexpr floating_point_t<T> ratio() const {return floating_point_t<T>(x) / floating_point_t<T>(y);}\n");
    }
    cx.raw("\n");

    for to in dims().filter(|&to| to != d) {
        let target = type_name(Entity::Vector(to), "T");
        let alias = Entity::Vector(to).alias();
        if to > d {
            let explicit = vector_resize(d, to, true)
                .iter()
                .map(|fill| fill_value(fill, d))
                .collect::<Vec<_>>()
                .join(", ");
            let extra = fields(to)[d..].iter().map(|s| format!("p_{s}")).collect::<Vec<_>>();
            out!(
                cx,
                "[[nodiscard]] constexpr ",
                &target,
                " to_",
                &alias,
                "(",
                &params("T", extra.iter().map(String::as_str)),
                ") const {return {",
                &explicit,
                "};}\n"
            );
        }
        let implicit = vector_resize(d, to, false)
            .iter()
            .map(|fill| fill_value(fill, d))
            .collect::<Vec<_>>()
            .join(", ");
        out!(
            cx,
            "[[nodiscard]] constexpr ",
            &target,
            " to_",
            &alias,
            "() const {return {",
            &implicit,
            "};}\n"
        );
    }
    cx.raw("\n");
}
