//! Mode configuration and static editor hints.

use serde::{Deserialize, Serialize};

/// Per-editor settings the mode depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Columns added per nesting level.
    pub indent_unit: u32,
    /// Tab stop width used when measuring columns.
    pub tab_size: u32,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            tab_size: 4,
        }
    }
}

/// How the editor should compute fold ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldStrategy {
    /// Fold from a `{` to its matching `}`.
    Brace,
}

/// Static settings the editor reads when it registers the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EditorHints {
    pub name: &'static str,
    pub mime: &'static str,
    /// Typing any of these re-indents the current line.
    pub electric_chars: &'static str,
    /// Auto-close pairs, as consecutive open/close characters.
    pub close_brackets: &'static str,
    pub fold: FoldStrategy,
    pub line_comment: &'static str,
}

pub const HINTS: EditorHints = EditorHints {
    name: crate::mode::NAME,
    mime: crate::mode::MIME,
    electric_chars: "{}):",
    close_brackets: "()[]{}''\"\"``",
    fold: FoldStrategy::Brace,
    line_comment: "//",
};

impl EditorHints {
    /// Returns `true` if typing `ch` should re-indent the line.
    pub fn is_electric(&self, ch: char) -> bool {
        self.electric_chars.contains(ch)
    }

    /// Character to insert after `open` when auto-closing.
    pub fn closing_pair(&self, open: char) -> Option<char> {
        let chars: Vec<char> = self.close_brackets.chars().collect();
        chars
            .chunks_exact(2)
            .find(|pair| pair[0] == open)
            .map(|pair| pair[1])
    }
}
