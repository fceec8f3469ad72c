//! Element type descriptors.

/// Broad category of an element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    Char,
    Signed,
    Unsigned,
    Float,
}

/// One supported element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeDesc {
    /// Prefix used in short aliases (`fvec3`, `imat2`).
    pub tag: &'static str,
    /// Spelling in the emitted language.
    pub name: &'static str,
    pub kind: TypeKind,
    /// `printf` conversion for number-to-text, empty when the type gets no
    /// dedicated overload (bool, fixed-width aliases).
    pub printf: &'static str,
    /// C library parse routine used for text-to-number.
    pub parse: &'static str,
}

impl TypeDesc {
    const fn new(
        tag: &'static str,
        name: &'static str,
        kind: TypeKind,
        printf: &'static str,
        parse: &'static str,
    ) -> Self {
        Self {
            tag,
            name,
            kind,
            printf,
            parse,
        }
    }

    /// Fixed-width aliases of fundamental types only get short names; their
    /// overloads come from the fundamental type they alias.
    pub fn is_fundamental(&self) -> bool {
        !self.name.starts_with("std::")
    }

    pub fn is_float(&self) -> bool {
        self.kind == TypeKind::Float
    }
}

/// Every element type, fundamental types first.
pub const TYPES: &[TypeDesc] = &[
    TypeDesc::new("b", "bool", TypeKind::Bool, "", ""),
    TypeDesc::new("c", "char", TypeKind::Char, "%d", "strtol"),
    TypeDesc::new("uc", "unsigned char", TypeKind::Unsigned, "%hhu", "strtoul"),
    TypeDesc::new("sc", "signed char", TypeKind::Signed, "%hhd", "strtol"),
    TypeDesc::new("s", "short", TypeKind::Signed, "%hd", "strtol"),
    TypeDesc::new("us", "unsigned short", TypeKind::Unsigned, "%hu", "strtoul"),
    TypeDesc::new("i", "int", TypeKind::Signed, "%d", "strtol"),
    TypeDesc::new("u", "unsigned int", TypeKind::Unsigned, "%u", "strtoul"),
    TypeDesc::new("l", "long", TypeKind::Signed, "%ld", "strtol"),
    TypeDesc::new("ul", "unsigned long", TypeKind::Unsigned, "%lu", "strtoul"),
    TypeDesc::new("ll", "long long", TypeKind::Signed, "%lld", "strtoll"),
    TypeDesc::new("ull", "unsigned long long", TypeKind::Unsigned, "%llu", "strtoull"),
    TypeDesc::new("f", "float", TypeKind::Float, "%.*g", "strtof"),
    TypeDesc::new("d", "double", TypeKind::Float, "%.*g", "strtod"),
    TypeDesc::new("ld", "long double", TypeKind::Float, "%.*Lg", "strtold"),
    TypeDesc::new("i8", "std::int8_t", TypeKind::Signed, "", ""),
    TypeDesc::new("u8", "std::uint8_t", TypeKind::Unsigned, "", ""),
    TypeDesc::new("i16", "std::int16_t", TypeKind::Signed, "", ""),
    TypeDesc::new("u16", "std::uint16_t", TypeKind::Unsigned, "", ""),
    TypeDesc::new("i32", "std::int32_t", TypeKind::Signed, "", ""),
    TypeDesc::new("u32", "std::uint32_t", TypeKind::Unsigned, "", ""),
    TypeDesc::new("i64", "std::int64_t", TypeKind::Signed, "", ""),
    TypeDesc::new("u64", "std::uint64_t", TypeKind::Unsigned, "", ""),
];

/// Types that get their own number/text conversion overloads.
pub fn convertible() -> impl Iterator<Item = &'static TypeDesc> {
    TYPES
        .iter()
        .filter(|ty| ty.is_fundamental() && ty.kind != TypeKind::Bool)
}
