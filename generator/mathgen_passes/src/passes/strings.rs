//! Number/text conversion primitives.
//!
//! The emitted parsers never throw: on failure they return zero and report
//! zero consumed characters, and the `std::string` forms only report success
//! when the whole input was consumed.

use mathgen_emit::{make, Emitter, Piece};
use mathgen_tables::types::{convertible, TypeDesc, TypeKind};

use crate::{out, GenContext};

/// Field width of the fixed-width "pretty" forms.
pub const PRETTY_WIDTH: usize = 12;

/// Accepted boolean spellings, tried in order.
const BOOL_SPELLINGS: &[(&str, bool)] = &[("true", true), ("false", false), ("1", true), ("0", false)];

const EXACT_PARSE: &str = "template <typename T> [[nodiscard]] T string_to_number(const std::string &str, bool *success = nullptr)
{
    int chars_consumed = 0;
    T ret = string_to_number<T>(str.c_str(), &chars_consumed);
    bool ok = chars_consumed > 0 && std::size_t(chars_consumed) == str.size();
    if (success) *success = ok;
    return ok ? ret : T{};
}

";

const PARSE_HELPERS: &str = "namespace impl
{
    [[nodiscard]] inline bool skip_delim(const char *&str, const char *delim)
    {
        std::size_t len = std::strlen(delim);
        if (std::strncmp(str, delim, len)) return false;
        str += len;
        return true;
    }

    template <typename T> [[nodiscard]] bool parse_elem(const char *&str, T &value)
    {
        int chars_consumed = 0;
        value = string_to_number<T>(str, &chars_consumed);
        if (chars_consumed == 0) return false;
        str += chars_consumed;
        return true;
    }
}
";

pub fn emit<E: Emitter>(cx: &mut GenContext<E>) {
    cx.banner("Strings");
    cx.open_section("Strings");

    number_to_string(cx);
    string_to_number(cx);
    cx.raw(PARSE_HELPERS);
    cx.declare("impl::skip_delim");
    cx.declare("impl::parse_elem");

    cx.close_section();
}

/// `printf` conversion with a minimum field width.
fn widened(printf: &str, width: usize) -> String {
    printf.replacen('%', &format!("%{width}"), 1)
}

fn number_to_string<E: Emitter>(cx: &mut GenContext<E>) {
    cx.raw("[[nodiscard]] inline std::string number_to_string(bool value) {return value ? \"true\" : \"false\";}\n");
    out!(
        cx,
        "[[nodiscard]] inline std::string number_to_string_pretty(bool value)\n{\n",
        "char buffer[64];\n",
        "std::snprintf(buffer, sizeof buffer, \"%",
        PRETTY_WIDTH,
        "s\", value ? \"true\" : \"false\");\n",
        "return buffer;\n}\n\n"
    );

    for ty in convertible() {
        let pretty = widened(ty.printf, PRETTY_WIDTH);
        for (name, format) in [
            ("number_to_string", ty.printf),
            ("number_to_string_pretty", pretty.as_str()),
        ] {
            let args: Piece<'_> = if ty.is_float() {
                make!(cx, "std::numeric_limits<", ty.name, ">::max_digits10, value").into()
            } else {
                "value".into()
            };
            out!(
                cx,
                "[[nodiscard]] inline std::string ",
                name,
                "(",
                ty.name,
                " value)\n{\n",
                "char buffer[64];\n",
                "std::snprintf(buffer, sizeof buffer, \"",
                format,
                "\", ",
                args,
                ");\n",
                "return buffer;\n}\n"
            );
        }
        cx.raw("\n");
    }
    cx.declare("number_to_string");
    cx.declare("number_to_string_pretty");
}

/// Result type of a C library parse routine.
fn parse_result(parse: &str) -> &'static str {
    match parse {
        "strtol" => "long",
        "strtoul" => "unsigned long",
        "strtoll" => "long long",
        "strtoull" => "unsigned long long",
        "strtof" => "float",
        "strtod" => "double",
        _ => "long double",
    }
}

fn string_to_number<E: Emitter>(cx: &mut GenContext<E>) {
    cx.raw("template <typename T> [[nodiscard]] T string_to_number(const char *str, int *chars_consumed = nullptr);\n\n");
    cx.declare("string_to_number");

    cx.raw("template <> [[nodiscard]] inline bool string_to_number<bool>(const char *str, int *chars_consumed)\n{\n");
    cx.raw("if (chars_consumed) *chars_consumed = 0;\n");
    for (spelling, value) in BOOL_SPELLINGS {
        out!(
            cx,
            "if (!std::strncmp(str, \"",
            *spelling,
            "\", ",
            spelling.len(),
            "))\n{\n",
            "if (chars_consumed) *chars_consumed = ",
            spelling.len(),
            ";\n",
            "return ",
            if *value { "true" } else { "false" },
            ";\n}\n"
        );
    }
    cx.raw("return false;\n}\n\n");

    for ty in convertible() {
        parse_overload(cx, ty);
    }

    cx.raw(EXACT_PARSE);
}

fn parse_overload<E: Emitter>(cx: &mut GenContext<E>, ty: &TypeDesc) {
    let parsed = parse_result(ty.parse);
    let call = if ty.is_float() {
        make!(cx, "std::", ty.parse, "(str, &end)")
    } else {
        make!(cx, "std::", ty.parse, "(str, &end, 10)")
    };
    let reject_sign = if ty.kind == TypeKind::Unsigned {
        " || *str == '-'"
    } else {
        ""
    };

    out!(
        cx,
        "template <> [[nodiscard]] inline ",
        ty.name,
        " string_to_number<",
        ty.name,
        ">(const char *str, int *chars_consumed)\n{\n",
        "if (chars_consumed) *chars_consumed = 0;\n",
        "if (!*str || std::isspace(static_cast<unsigned char>(*str))",
        reject_sign,
        ") return 0;\n",
        "errno = 0;\n",
        "char *end = nullptr;\n",
        parsed,
        " value = ",
        call,
        ";\n",
        "if (errno || end == str) return 0;\n"
    );
    if parsed != ty.name {
        let limits = make!(cx, "std::numeric_limits<", ty.name, ">");
        if ty.kind == TypeKind::Unsigned {
            out!(cx, "if (value > ", limits, "::max()) return 0;\n");
        } else {
            out!(
                cx,
                "if (value < ",
                limits,
                "::min() || value > ",
                limits,
                "::max()) return 0;\n"
            );
        }
    }
    out!(
        cx,
        "if (chars_consumed) *chars_consumed = int(end - str);\n",
        "return static_cast<",
        ty.name,
        ">(value);\n}\n\n"
    );
}
