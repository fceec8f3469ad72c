//! Matrix-only members: identity, transpose, resizing, determinant and
//! inverse.

use mathgen_emit::Emitter;
use mathgen_tables::{mat_shapes, shapes::matrix_resize, Entity};

use crate::algebra::{adjugate, determinant};
use crate::render::{fill_value, member, rows, type_name};
use crate::{out, GenContext};

pub fn members<E: Emitter>(cx: &mut GenContext<E>, w: usize, h: usize) {
    let entity = Entity::Matrix { w, h };

    let identity = entity
        .element_paths()
        .iter()
        .map(|p| if p[0] == p[1] { "1" } else { "0" }.to_owned())
        .collect::<Vec<_>>();
    out!(
        cx,
        "[[nodiscard]] static constexpr type identity()\n{\nreturn type(",
        &rows(&identity, w),
        ");\n}\n"
    );

    let flipped = Entity::Matrix { w: h, h: w };
    let transposed = flipped
        .element_paths()
        .iter()
        .map(|p| member(&[p[1], p[0]]))
        .collect::<Vec<_>>();
    let flipped_type = type_name(flipped, "T");
    out!(
        cx,
        "[[nodiscard]] constexpr ",
        &flipped_type,
        " transpose() const\n{\nreturn ",
        &flipped_type,
        "(",
        &rows(&transposed, h),
        ");\n}\n\n"
    );

    resizes(cx, w, h);

    if w == h {
        inverse(cx, w);
    }
}

/// Conversions to every other shape, extending toward identity.
fn resizes<E: Emitter>(cx: &mut GenContext<E>, w: usize, h: usize) {
    for (w2, h2) in mat_shapes().filter(|&shape| shape != (w, h)) {
        let target = Entity::Matrix { w: w2, h: h2 };
        let target_type = type_name(target, "T");
        let cells = matrix_resize((w, h), (w2, h2))
            .iter()
            .map(|fill| fill_value(fill, 0))
            .collect::<Vec<_>>();
        out!(
            cx,
            "[[nodiscard]] constexpr ",
            &target_type,
            " to_",
            &target.alias(),
            "() const\n{\nreturn ",
            &target_type,
            "(",
            &rows(&cells, w2),
            ");\n}\n"
        );
        if w2 == h2 {
            out!(
                cx,
                "[[nodiscard]] constexpr ",
                &target_type,
                " to_mat",
                w2,
                "() const {return to_",
                &target.alias(),
                "();}\n"
            );
        }
    }
    cx.raw("\n");
}

/// Cofactor determinant and inverse. A singular matrix inverts to identity.
fn inverse<E: Emitter>(cx: &mut GenContext<E>, n: usize) {
    let elem = |col: usize, row: usize| member(&[col, row]);
    out!(
        cx,
        "[[nodiscard]] constexpr base_type det() const {return ",
        &determinant(n).render(&elem),
        ";}\n"
    );

    let cells = Entity::Matrix { w: n, h: n }
        .element_paths()
        .iter()
        .map(|p| {
            let (negate, expr) = adjugate(n, p[0], p[1]);
            let sign = if negate { "-" } else { "" };
            format!("{sign}({}) / d", expr.render(&elem))
        })
        .collect::<Vec<_>>();
    out!(
        cx,
        "[[nodiscard]] constexpr type inverse() const\n{\n",
        "base_type d = det();\n",
        "if (d == 0) return identity();\n",
        "return type(",
        &rows(&cells, n),
        ");\n}\n\n"
    );
}
