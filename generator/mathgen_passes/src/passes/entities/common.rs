//! Members every entity has, vector or matrix.

use mathgen_emit::Emitter;
use mathgen_tables::{aliases::aliases_of, field, fields, Entity, MulShape, Operand};

use super::spelling;
use crate::render::{self, cell_name, member, member_of, type_name};
use crate::{out, GenContext};

/// Aliased storage: one anonymous union per slot, so every alias of a slot
/// names the same object.
pub fn storage<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    let spelled = spelling(cx, entity, "T");
    out!(cx, "using type = ", spelled, ";\n");
    match entity {
        Entity::Vector(d) => {
            out!(cx, "using member_type = T;\n", "using base_type = T;\n");
            out!(cx, "static constexpr int size = ", d, ";\n");
        }
        Entity::Matrix { w, h } => {
            out!(cx, "using member_type = vec", h, "<T>;\n", "using base_type = T;\n");
            out!(cx, "static constexpr int size = ", w, ", width = ", w, ", height = ", h, ";\n");
        }
    }
    cx.raw("static constexpr bool is_floating_point = std::is_floating_point_v<base_type>;\n\n");

    for i in 0..entity.size() {
        let names = aliases_of(i).collect::<Vec<_>>().join(", ");
        out!(cx, "union {member_type ", &names, ";};\n");
    }
    cx.raw("\n");
}

pub fn constructors<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    let slots = fields(entity.size());
    let each = |f: &dyn Fn(&str) -> String| {
        slots.iter().map(|&s| f(s)).collect::<Vec<_>>().join(", ")
    };

    let zeroed = each(&|s| format!("{s}{{}}"));
    let broadcast = each(&|s| format!("{s}(obj)"));
    let param_names = slots.iter().map(|s| format!("p_{s}")).collect::<Vec<_>>();
    let params = render::params("member_type", param_names.iter().map(String::as_str));
    let init = each(&|s| format!("{s}(p_{s})"));
    let converted = each(&|s| format!("{s}(obj.{s})"));
    let other = type_name(entity, "TT");

    out!(cx, "constexpr vec() : ", &zeroed, " {}\n");
    cx.raw("vec(uninit_t) {}\n");
    out!(cx, "explicit constexpr vec(base_type obj) : ", &broadcast, " {}\n");
    out!(cx, "constexpr vec(", &params, ") : ", &init, " {}\n");

    if let Entity::Matrix { w, h } = entity {
        // Scalars arrive in reading order; each column takes its rows.
        let paths = entity.element_paths();
        let cells = paths.iter().map(|p| cell_name(p)).collect::<Vec<_>>();
        let scalar_params = render::params("base_type", cells.iter().map(String::as_str));
        let columns = (0..w)
            .map(|c| {
                let rows = (0..h).map(|r| cell_name(&[c, r])).collect::<Vec<_>>().join(", ");
                format!("{}({rows})", field(c))
            })
            .collect::<Vec<_>>()
            .join(", ");
        out!(cx, "constexpr vec(", &scalar_params, ") : ", &columns, " {}\n");
    }

    out!(cx, "template <typename TT> explicit constexpr vec(const ", &other, " &obj) : ", &converted, " {}\n");
    out!(
        cx,
        "template <typename TT> [[nodiscard]] constexpr ",
        &other,
        " to() const {return ",
        &other,
        "(*this);}\n\n"
    );
}

/// `operator[]` for any integer-like index. Out-of-range reads yield a
/// default-constructed member.
pub fn indexing<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    for mutable in [false, true] {
        if mutable {
            cx.raw("template <typename I> [[nodiscard]] member_type &operator[](I pos)\n{\n");
        } else {
            cx.raw("template <typename I> [[nodiscard]] constexpr member_type operator[](I pos) const\n{\n");
        }
        cx.raw("switch (pos)\n{\n");
        for (i, name) in fields(entity.size()).iter().enumerate() {
            out!(cx, "@case ", i, ": return ", *name, ";\n");
        }
        if mutable {
            cx.raw("@default: static member_type dummy; dummy = member_type{}; return dummy;\n");
        } else {
            cx.raw("@default: return member_type{};\n");
        }
        cx.raw("}\n}\n");
    }
    cx.raw("\n");
}

/// How a reduction combines per-slot values.
enum Combine {
    Infix(&'static str),
    Call(&'static str),
}

struct Reduction {
    name: &'static str,
    returns: &'static str,
    combine: Combine,
}

const REDUCTIONS: &[Reduction] = &[
    Reduction {
        name: "sum",
        returns: "base_type",
        combine: Combine::Infix(" + "),
    },
    Reduction {
        name: "product",
        returns: "base_type",
        combine: Combine::Infix(" * "),
    },
    Reduction {
        name: "min",
        returns: "base_type",
        combine: Combine::Call("std::min"),
    },
    Reduction {
        name: "max",
        returns: "base_type",
        combine: Combine::Call("std::max"),
    },
    Reduction {
        name: "any",
        returns: "bool",
        combine: Combine::Infix(" || "),
    },
    Reduction {
        name: "all",
        returns: "bool",
        combine: Combine::Infix(" && "),
    },
];

pub fn reductions<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    for r in REDUCTIONS {
        let operands = fields(entity.size())
            .iter()
            .map(|s| {
                if entity.is_matrix() {
                    format!("{s}.{}()", r.name)
                } else {
                    (*s).to_owned()
                }
            })
            .collect::<Vec<_>>();
        let body = match r.combine {
            Combine::Infix(op) => operands.join(op),
            Combine::Call(f) => format!("{f}({{{}}})", operands.join(", ")),
        };
        out!(
            cx,
            "[[nodiscard]] constexpr ",
            r.returns,
            " ",
            r.name,
            "() const {return ",
            &body,
            ";}\n"
        );
    }
    cx.raw("[[nodiscard]] constexpr bool none() const {return !any();}\n");
    cx.raw(
        "[[nodiscard]] explicit constexpr operator bool() const
        {
            static_assert(!std::is_same_v<base_type, bool>, \"Use .any(), .all(), or .none() for boolean vectors.\");
            return any();
        }\n\n",
    );
}

/// Generalized multiply against every right operand with a matching inner
/// extent.
pub fn multiply<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    for shape in MulShape::with_left(entity) {
        let right = type_name(shape.right(), "TT");
        let cells = shape
            .result_cells()
            .map(|(col, row)| {
                shape
                    .terms(col, row)
                    .iter()
                    .map(|(l, r)| format!("{} * {}", member(l), member_of("o", r)))
                    .collect::<Vec<_>>()
                    .join(" + ")
            })
            .collect::<Vec<_>>();

        match shape.result() {
            Operand::Scalar => {
                out!(
                    cx,
                    "template <typename TT> [[nodiscard]] constexpr larger_t<T, TT> mul(const ",
                    &right,
                    " &o) const {return ",
                    &cells.join(""),
                    ";}\n"
                );
            }
            Operand::Entity(result) => {
                let result = type_name(result, "larger_t<T, TT>");
                let row_len = if shape.rows == 1 || shape.cols == 1 {
                    cells.len()
                } else {
                    shape.cols
                };
                out!(
                    cx,
                    "template <typename TT> [[nodiscard]] constexpr ",
                    &result,
                    " mul(const ",
                    &right,
                    " &o) const\n{\nreturn ",
                    &result,
                    "(",
                    &render::rows(&cells, row_len),
                    ");\n}\n"
                );
            }
        }
    }
}
