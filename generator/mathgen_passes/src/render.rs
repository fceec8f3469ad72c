//! Small text helpers shared by the passes.

use mathgen_tables::{field, Entity, Fill};

/// Member access for a path: `y`, `z.x`.
pub fn member(path: &[usize]) -> String {
    path.iter().map(|&i| field(i)).collect::<Vec<_>>().join(".")
}

/// Member access through `object`: `o.z.x`.
pub fn member_of(object: &str, path: &[usize]) -> String {
    if path.is_empty() {
        object.to_owned()
    } else {
        format!("{object}.{}", member(path))
    }
}

/// Identifier built from the names along a path: `zx` for column z, row x.
pub fn cell_name(path: &[usize]) -> String {
    path.iter().map(|&i| field(i)).collect()
}

/// Spelling of an entity over element type `elem`: `vec3<T>`, `mat2x4<T>`.
pub fn type_name(entity: Entity, elem: &str) -> String {
    format!("{}<{elem}>", entity.alias())
}

/// Row-major literal: cells of a row joined by `, `, rows continued on
/// half-indented lines.
pub fn rows(cells: &[String], row_len: usize) -> String {
    cells
        .chunks(row_len.max(1))
        .map(|row| row.join(", "))
        .collect::<Vec<_>>()
        .join(",\n$")
}

/// Value of one resized element; caller-supplied values are named after the
/// slot they fill, starting at `from`.
pub fn fill_value(fill: &Fill, from: usize) -> String {
    match fill {
        Fill::Keep(path) => member(path),
        Fill::Zero => "0".to_owned(),
        Fill::One => "1".to_owned(),
        Fill::Param(n) => format!("p_{}", field(from + n)),
    }
}

/// `T p_x, T p_y` style parameter list.
pub fn params<'a>(ty: &str, names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(|name| format!("{ty} {name}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn members() {
        assert_eq!(member(&[2]), "z");
        assert_eq!(member(&[2, 0]), "z.x");
        assert_eq!(member_of("o", &[1, 3]), "o.y.w");
        assert_eq!(member_of("value", &[]), "value");
        assert_eq!(cell_name(&[2, 0]), "zx");
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(Entity::Vector(2), "TT"), "vec2<TT>");
        assert_eq!(type_name(Entity::Matrix { w: 3, h: 4 }, "T"), "mat3x4<T>");
    }

    #[test]
    fn rows_break_with_half_indent() {
        let cells: Vec<String> = ["1", "0", "0", "1"].map(String::from).to_vec();
        assert_eq!(rows(&cells, 2), "1, 0,\n$0, 1");
        assert_eq!(rows(&cells, 4), "1, 0, 0, 1");
    }

    #[test]
    fn fills() {
        assert_eq!(fill_value(&Fill::Keep(smallvec![1, 2]), 0), "y.z");
        assert_eq!(fill_value(&Fill::Param(1), 2), "p_w");
        assert_eq!(fill_value(&Fill::One, 0), "1");
    }

    #[test]
    fn param_lists() {
        assert_eq!(params("T", ["p_x", "p_y"]), "T p_x, T p_y");
        assert_eq!(params("T", []), "");
    }
}
