//! Short type aliases per element type, and the `Export` namespace that
//! gathers the public names for a single `using namespace`.

use mathgen_emit::Emitter;
use mathgen_tables::{dims, Entity, TYPES};

use crate::{out, GenContext};

/// Templates re-exported by name, besides the per-shape aliases.
const TEMPLATES: &[(&str, &str)] = &[("Vector", "vec"), ("Vector", "mat"), ("Quaternion", "quat")];

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    cx.require("CustomOperators");
    cx.require("apply_elementwise");
    cx.require("to_string");
    cx.require("is_vector_v");
    cx.banner("Export");
    cx.open_section("Aliases");

    for ty in TYPES {
        tracing::trace!(tag = ty.tag, "aliases");
        for entity in Entity::all() {
            let alias = entity.alias();
            cx.require(&alias);
            out!(cx, "using ", ty.tag, &alias, " = ", &alias, "<", ty.name, ">;\n");
        }
        for d in dims() {
            out!(cx, "using ", ty.tag, "mat", d, " = mat", d, "<", ty.name, ">;\n");
        }
        if ty.is_float() {
            out!(cx, "using ", ty.tag, "quat = quat<", ty.name, ">;\n");
        }
        cx.raw("\n");
    }
    cx.close_section();

    let root = cx.namespace();
    out!(cx, "namespace ", root, "::Export\n{\n");
    cx.raw("using namespace Aliases;\nusing namespace CustomOperators;\nusing namespace Misc;\nusing namespace Strings;\nusing namespace Utility;\n\n");
    for (section, name) in TEMPLATES {
        cx.require(name);
        out!(cx, "using ", *section, "::", *name, ";\n");
    }
    for entity in Entity::all() {
        out!(cx, "using Vector::", &entity.alias(), ";\n");
    }
    for d in dims() {
        out!(cx, "using Vector::mat", d, ";\n");
    }
    cx.raw("}\n\n");
    cx.declare("Export");
}
