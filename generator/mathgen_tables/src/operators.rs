//! Operator symbol tables.

use bitflags::bitflags;

bitflags! {
    /// Roles an operator symbol is emitted in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OpRole: u16 {
        /// Element-wise arithmetic or bitwise.
        const BINARY = 1 << 0;
        /// Element-wise prefix.
        const UNARY = 1 << 1;
        const INC_DEC = 1 << 2;
        /// Whole-operand truthiness, combined.
        const BOOL_BINARY = 1 << 3;
        const BOOL_UNARY = 1 << 4;
        const COMPOUND = 1 << 5;
        /// Element-wise, result element type is `bool`.
        const COMPARISON = 1 << 6;
        /// Whole-operand, single `bool` result.
        const EQUALITY = 1 << 7;
    }
}

pub const BINARY_OPS: &[&str] = &["+", "-", "*", "/", "%", "^", "&", "|", "<<", ">>"];
pub const UNARY_OPS: &[&str] = &["~", "+", "-"];
pub const INC_DEC_OPS: &[&str] = &["++", "--"];
pub const BOOL_BINARY_OPS: &[&str] = &["&&", "||"];
pub const BOOL_UNARY_OPS: &[&str] = &["!"];
pub const COMPOUND_OPS: &[&str] = &["+=", "-=", "*=", "/=", "%=", "^=", "&=", "|=", "<<=", ">>="];
pub const COMPARISON_OPS: &[&str] = &["<", ">", "<=", ">="];
pub const EQUALITY_OPS: &[&str] = &["==", "!="];

/// Every list with the role it is emitted under.
pub const OPERATOR_TABLE: &[(OpRole, &[&str])] = &[
    (OpRole::BINARY, BINARY_OPS),
    (OpRole::UNARY, UNARY_OPS),
    (OpRole::INC_DEC, INC_DEC_OPS),
    (OpRole::BOOL_BINARY, BOOL_BINARY_OPS),
    (OpRole::BOOL_UNARY, BOOL_UNARY_OPS),
    (OpRole::COMPOUND, COMPOUND_OPS),
    (OpRole::COMPARISON, COMPARISON_OPS),
    (OpRole::EQUALITY, EQUALITY_OPS),
];

/// Every role `sym` appears under.
pub fn roles(sym: &str) -> OpRole {
    OPERATOR_TABLE
        .iter()
        .filter(|(_, list)| list.contains(&sym))
        .fold(OpRole::empty(), |acc, (role, _)| acc | *role)
}

/// Binary operator behind a compound assignment (`"<<="` -> `"<<"`).
pub fn compound_base(op: &str) -> &str {
    op.strip_suffix('=').unwrap_or(op)
}

/// Precedence level of a binary operator in the emitted language; lower
/// binds tighter.
pub fn binary_precedence(sym: &str) -> Option<u8> {
    let level = match sym {
        "*" | "/" | "%" => 5,
        "+" | "-" => 6,
        "<<" | ">>" => 7,
        "<" | ">" | "<=" | ">=" => 9,
        "==" | "!=" => 10,
        "&" => 11,
        "^" => 12,
        "|" => 13,
        "&&" => 14,
        "||" => 15,
        _ if sym.ends_with('=') && roles(sym).contains(OpRole::COMPOUND) => 16,
        _ => return None,
    };
    Some(level)
}

/// Infix delimiter of the chained-operator sugar: `a /dot/ b`.
///
/// Must bind exactly like multiplication so `a /dot/ b + c` and
/// `a * b /cross/ c` keep their conventional meaning.
pub const CUSTOM_OP_DELIM: &str = "/";

/// Named binary operations reachable through the chained-operator sugar.
/// Each dispatches to the member function of the same name.
pub const CUSTOM_OPS: &[&str] = &["dot", "cross", "mul"];

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn lists_have_no_duplicates() {
        for (role, list) in OPERATOR_TABLE {
            let mut seen = FxHashSet::default();
            for sym in *list {
                assert!(seen.insert(*sym), "{sym} repeated in {role:?}");
            }
        }
    }

    #[test]
    fn shared_symbols_are_role_compatible() {
        // Only the arithmetic signs double as prefix operators.
        for (_, list) in OPERATOR_TABLE {
            for sym in *list {
                let roles = roles(sym);
                if roles.bits().count_ones() > 1 {
                    assert_eq!(roles, OpRole::BINARY | OpRole::UNARY, "{sym}");
                    assert!(matches!(*sym, "+" | "-"));
                }
            }
        }
    }

    #[test]
    fn every_compound_has_a_binary_base() {
        for op in COMPOUND_OPS {
            assert!(BINARY_OPS.contains(&compound_base(op)), "{op}");
        }
        assert_eq!(COMPOUND_OPS.len(), BINARY_OPS.len());
    }

    #[test]
    fn custom_delimiter_binds_like_multiplication() {
        assert_eq!(roles(CUSTOM_OP_DELIM), OpRole::BINARY);
        assert_eq!(
            binary_precedence(CUSTOM_OP_DELIM),
            binary_precedence("*")
        );
        assert!(binary_precedence(CUSTOM_OP_DELIM) < binary_precedence("+"));
    }

    #[test]
    fn precedence_ordering() {
        assert!(binary_precedence("<<") < binary_precedence("<"));
        assert!(binary_precedence("&") < binary_precedence("|"));
        assert_eq!(binary_precedence("+="), Some(16));
        assert_eq!(binary_precedence("~"), None);
    }

    #[test]
    fn custom_ops_are_identifiers() {
        for name in CUSTOM_OPS {
            assert!(name.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
