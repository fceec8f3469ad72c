//! Transform factories.
//!
//! Each factory has one native body on its minimal shape; larger shapes
//! call that body and resize the result toward identity.

use mathgen_emit::Emitter;
use mathgen_tables::factories::{available_for, Availability, Factory, FactoryKind};

use crate::render::rows;
use crate::{out, GenContext};

/// Native implementation of a factory.
enum Body {
    /// Local definitions followed by a row-major matrix literal.
    Cells {
        prelude: &'static str,
        cells: &'static [&'static str],
    },
    /// Delegates to another factory on the same shape.
    Delegate(&'static str),
}

const ANGLE: &str = "T c = std::cos(angle);\nT s = std::sin(angle);\n";

fn body(kind: FactoryKind) -> Body {
    let (prelude, cells): (&str, &[&str]) = match kind {
        FactoryKind::Scale2 => ("", &["factor.x", "0", "0", "factor.y"]),
        FactoryKind::Scale3 => (
            "",
            &["factor.x", "0", "0", "0", "factor.y", "0", "0", "0", "factor.z"],
        ),
        FactoryKind::Translate2 => ("", &["1", "0", "offset.x", "0", "1", "offset.y"]),
        FactoryKind::Translate3 => (
            "",
            &[
                "1", "0", "0", "offset.x", "0", "1", "0", "offset.y", "0", "0", "1", "offset.z",
            ],
        ),
        FactoryKind::Rotate2 => (ANGLE, &["c", "-s", "s", "c"]),
        FactoryKind::Rotate3Normalized => (
            "T c = std::cos(angle);\nT s = std::sin(angle);\nT t = 1 - c;\n",
            &[
                "axis.x * axis.x * t + c",
                "axis.x * axis.y * t - axis.z * s",
                "axis.x * axis.z * t + axis.y * s",
                "axis.y * axis.x * t + axis.z * s",
                "axis.y * axis.y * t + c",
                "axis.y * axis.z * t - axis.x * s",
                "axis.z * axis.x * t - axis.y * s",
                "axis.z * axis.y * t + axis.x * s",
                "axis.z * axis.z * t + c",
            ],
        ),
        FactoryKind::Rotate3 => {
            return Body::Delegate("rotate_with_normalized_axis(axis.norm(), angle)");
        }
        FactoryKind::Ortho2 => (
            "",
            &[
                "2 / (max.x - min.x)",
                "0",
                "(min.x + max.x) / (min.x - max.x)",
                "0",
                "2 / (max.y - min.y)",
                "(min.y + max.y) / (min.y - max.y)",
            ],
        ),
        FactoryKind::Ortho3 => (
            "",
            &[
                "2 / (max.x - min.x)",
                "0",
                "0",
                "(min.x + max.x) / (min.x - max.x)",
                "0",
                "2 / (max.y - min.y)",
                "0",
                "(min.y + max.y) / (min.y - max.y)",
                "0",
                "0",
                "2 / (near - far)",
                "(near + far) / (near - far)",
            ],
        ),
        FactoryKind::LookAt => (
            "vec3<T> v3 = (src - dst).norm();\nvec3<T> v1 = local_up.cross(v3).norm();\nvec3<T> v2 = v3.cross(v1);\n",
            &[
                "v1.x", "v1.y", "v1.z", "-src.dot(v1)",
                "v2.x", "v2.y", "v2.z", "-src.dot(v2)",
                "v3.x", "v3.y", "v3.z", "-src.dot(v3)",
            ],
        ),
        FactoryKind::Perspective => (
            "T f = 1 / std::tan(y_fov / 2);\n",
            &[
                "f / wh_aspect", "0", "0", "0",
                "0", "f", "0", "0",
                "0", "0", "(near + far) / (near - far)", "2 * near * far / (near - far)",
                "0", "0", "-1", "0",
            ],
        ),
    };
    Body::Cells { prelude, cells }
}

/// Factories without trigonometry or square roots can run at compile time.
fn is_constexpr(kind: FactoryKind) -> bool {
    matches!(
        kind,
        FactoryKind::Scale2
            | FactoryKind::Scale3
            | FactoryKind::Translate2
            | FactoryKind::Translate3
            | FactoryKind::Ortho2
            | FactoryKind::Ortho3
    )
}

pub fn members<E: Emitter>(cx: &mut GenContext<E>, w: usize, h: usize) {
    for (factory, availability) in available_for(w, h) {
        let constexpr = if is_constexpr(factory.kind) {
            "constexpr "
        } else {
            ""
        };
        out!(
            cx,
            "[[nodiscard]] static ",
            constexpr,
            "type ",
            factory.name,
            "(",
            factory.params,
            ")\n{\n"
        );
        match availability {
            Availability::Native => native(cx, factory),
            Availability::Forward((fw, fh)) => out!(
                cx,
                "return mat",
                fw,
                "x",
                fh,
                "<T>::",
                factory.name,
                "(",
                factory.args,
                ").to_mat",
                w,
                "x",
                h,
                "();\n"
            ),
            Availability::Absent => {}
        }
        cx.raw("}\n");
    }
    cx.raw("\n");
}

fn native<E: Emitter>(cx: &mut GenContext<E>, factory: &Factory) {
    match body(factory.kind) {
        Body::Cells { prelude, cells } => {
            let cells = cells.iter().map(|c| (*c).to_owned()).collect::<Vec<_>>();
            out!(
                cx,
                prelude,
                "return type(",
                &rows(&cells, factory.min.0),
                ");\n"
            );
        }
        Body::Delegate(call) => out!(cx, "return ", call, ";\n"),
    }
}
