//! Text form of every entity: printing with configurable delimiters and
//! parsing with the mirrored delimiter set.

use mathgen_emit::Emitter;
use mathgen_tables::Entity;

use crate::render::{member_of, type_name};
use crate::{out, GenContext};

/// Delimiter parameters with their defaults.
fn delimiters(entity: Entity) -> &'static str {
    if entity.is_matrix() {
        "const char *start = \"[\", const char *sep = \",\", const char *row_sep = \";\", const char *end = \"]\""
    } else {
        "const char *start = \"[\", const char *sep = \",\", const char *end = \"]\""
    }
}

fn delimiter_args(entity: Entity) -> &'static str {
    if entity.is_matrix() {
        "start, sep, row_sep, end"
    } else {
        "start, sep, end"
    }
}

/// Separator emitted before element `index` of a row-major walk.
fn separator(entity: Entity, index: usize) -> &'static str {
    match entity {
        Entity::Matrix { w, .. } if index % w == 0 => "row_sep",
        _ => "sep",
    }
}

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    for name in ["number_to_string", "number_to_string_pretty", "impl::skip_delim", "impl::parse_elem"] {
        cx.require(name);
    }
    cx.banner("Text form");
    cx.open_section("Strings");

    for entity in Entity::all() {
        tracing::trace!(entity = %entity.alias(), "text form");
        printers(cx, entity);
        parsers(cx, entity);
    }
    cx.declare("to_string");
    cx.declare("to_string_pretty");

    cx.close_section();
}

fn printers<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    let ty = type_name(entity, "T");
    let pieces = entity
        .element_paths()
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let elem = format!("func({})", member_of("value", path));
            if i == 0 {
                elem
            } else {
                format!("{} + {elem}", separator(entity, i))
            }
        })
        .collect::<Vec<_>>()
        .join(" + ");

    out!(
        cx,
        "template <typename T, typename F> [[nodiscard]] std::string to_string_with(const ",
        &ty,
        " &value, F &&func, ",
        delimiters(entity),
        ")\n{\n",
        "return std::string(start) + ",
        &pieces,
        " + end;\n}\n"
    );
    for (name, convert) in [
        ("to_string", "number_to_string"),
        ("to_string_pretty", "number_to_string_pretty"),
    ] {
        out!(
            cx,
            "template <typename T> [[nodiscard]] std::string ",
            name,
            "(const ",
            &ty,
            " &value, ",
            delimiters(entity),
            ")\n{\n",
            "return to_string_with(value, [](const T &elem){return ",
            convert,
            "(elem);}, ",
            delimiter_args(entity),
            ");\n}\n"
        );
    }
}

/// Parsing stops at the first missing delimiter or element, reporting zero
/// consumed characters and a default value.
fn parsers<E: Emitter>(cx: &mut GenContext<E>, entity: Entity) {
    let ty = type_name(entity, "T");
    let name = format!("string_to_{}", entity.alias());

    out!(
        cx,
        "template <typename T> [[nodiscard]] ",
        &ty,
        " ",
        &name,
        "(const char *str, int *chars_consumed = nullptr, ",
        delimiters(entity),
        ")\n{\n",
        "if (chars_consumed) *chars_consumed = 0;\n",
        "const char *cur = str;\n",
        &ty,
        " ret;\n",
        "if (!impl::skip_delim(cur, start)) return {};\n"
    );
    for (i, path) in entity.element_paths().iter().enumerate() {
        if i > 0 {
            out!(cx, "if (!impl::skip_delim(cur, ", separator(entity, i), ")) return {};\n");
        }
        out!(cx, "if (!impl::parse_elem(cur, ", &member_of("ret", path), ")) return {};\n");
    }
    cx.raw("if (!impl::skip_delim(cur, end)) return {};\n");
    cx.raw("if (chars_consumed) *chars_consumed = int(cur - str);\nreturn ret;\n}\n");

    out!(
        cx,
        "template <typename T> [[nodiscard]] ",
        &ty,
        " ",
        &name,
        "(const std::string &str, bool *success = nullptr, ",
        delimiters(entity),
        ")\n{\n",
        "int chars_consumed = 0;\n",
        &ty,
        " ret = ",
        &name,
        "<T>(str.c_str(), &chars_consumed, ",
        delimiter_args(entity),
        ");\n",
        "bool ok = chars_consumed > 0 && std::size_t(chars_consumed) == str.size();\n",
        "if (success) *success = ok;\n",
        "return ok ? ret : ",
        &ty,
        "{};\n}\n\n"
    );
    cx.declare(name);
}
