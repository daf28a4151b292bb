//! Keyword and atom tables.
//!
//! Two read-only tables classify identifier-like lexemes:
//! 1. **Keywords**: reserved words, styled `keyword`
//! 2. **Atoms**: literals and built-in function names, styled `atom`
//!
//! The keyword table is consulted first. `true`, `false`, and `NO!` appear in
//! both tables, so they always come out as keywords and the atom entries for
//! them never match.
//!
//! Lookups are length-bucketed: the lexeme length rejects most identifiers
//! before any string comparison.

/// Reserved keywords.
pub const KEYWORDS: &[&str] = &[
    "fn",
    "let",
    "true",
    "false",
    "NO!",
    "if",
    "else",
    "return",
    "switch",
    "case",
    "default",
    "notaclass",
    "pack",
    "field",
    "public",
    "lazy",
];

/// Literals and built-in functions.
pub const ATOMS: &[&str] = &[
    "true", "false", "NO!", "new", "len", "first", "last", "rest", "push", "puts", "ayok?",
    "sleep", "map",
];

/// Returns `true` if `text` is a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "fn" | "if"),
        3 => matches!(text, "let" | "NO!"),
        4 => matches!(text, "true" | "else" | "case" | "pack" | "lazy"),
        5 => matches!(text, "false" | "field"),
        6 => matches!(text, "return" | "switch" | "public"),
        7 => text == "default",
        9 => text == "notaclass",
        _ => false,
    }
}

/// Returns `true` if `text` is an atom.
#[inline]
pub fn is_atom(text: &str) -> bool {
    match text.len() {
        3 => matches!(text, "NO!" | "new" | "len" | "map"),
        4 => matches!(text, "true" | "last" | "rest" | "push" | "puts"),
        5 => matches!(text, "false" | "first" | "ayok?" | "sleep"),
        _ => false,
    }
}

/// Returns `true` for keywords that open a `switch` arm.
#[inline]
pub(crate) fn opens_case(text: &str) -> bool {
    matches!(text, "case" | "default")
}
