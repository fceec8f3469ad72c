//! Field alias groups.
//!
//! Position `i` of every group names the same storage slot. An entity of
//! size `n` uses the first `n` names of each group.

/// Number of alias groups.
pub const GROUP_COUNT: usize = 3;

/// Names per group (the largest supported dimension).
pub const GROUP_LEN: usize = 4;

/// Coordinate, color, and texture-coordinate naming.
pub const FIELD_ALIASES: [[&str; GROUP_LEN]; GROUP_COUNT] = [
    ["x", "y", "z", "w"],
    ["r", "g", "b", "a"],
    ["s", "t", "p", "q"],
];

/// Primary name of slot `i`.
///
/// # Panics
///
/// Panics if `i >= GROUP_LEN`; dimensions come from the shape tables.
pub fn field(i: usize) -> &'static str {
    FIELD_ALIASES[0][i]
}

/// Primary names of the first `n` slots.
pub fn fields(n: usize) -> &'static [&'static str] {
    &FIELD_ALIASES[0][..n]
}

/// Every alias of slot `i`, primary first.
pub fn aliases_of(i: usize) -> impl Iterator<Item = &'static str> {
    FIELD_ALIASES.iter().map(move |group| group[i])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn every_name_is_unique() {
        let mut seen = FxHashSet::default();
        for group in &FIELD_ALIASES {
            for name in group {
                assert!(seen.insert(*name), "duplicate alias {name}");
            }
        }
        assert_eq!(seen.len(), GROUP_COUNT * GROUP_LEN);
    }

    #[test]
    fn aliases_line_up_by_position() {
        assert_eq!(aliases_of(0).collect::<Vec<_>>(), ["x", "r", "s"]);
        assert_eq!(aliases_of(3).collect::<Vec<_>>(), ["w", "a", "q"]);
    }

    #[test]
    fn fields_is_a_prefix() {
        assert_eq!(fields(2), ["x", "y"]);
        assert_eq!(fields(4), ["x", "y", "z", "w"]);
        assert_eq!(field(2), "z");
    }
}
