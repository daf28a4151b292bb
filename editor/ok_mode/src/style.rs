//! Highlighting styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification attached to a lexeme.
///
/// Uncolored lexemes (whitespace, punctuation) have no style; the mode
/// returns `None` for them. The string forms are the CSS class suffixes the
/// editor renders (`cm-keyword`, `cm-string`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Number,
    String,
    Comment,
    Operator,
    Keyword,
    Atom,
    Variable,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 7] = [
        Style::Number,
        Style::String,
        Style::Comment,
        Style::Operator,
        Style::Keyword,
        Style::Atom,
        Style::Variable,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Number => "number",
            Style::String => "string",
            Style::Comment => "comment",
            Style::Operator => "operator",
            Style::Keyword => "keyword",
            Style::Atom => "atom",
            Style::Variable => "variable",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
