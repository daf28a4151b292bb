//! Editor mode for the `ok` language.
//!
//! A line-at-a-time scanner that classifies lexemes for syntax highlighting
//! and tracks open brackets so the editor can compute indentation. The host
//! editor owns one [`ScannerState`] per buffer and threads it through
//! [`OkMode::token`] for every lexeme, and through [`OkMode::indent`] when it
//! needs an indentation hint for the next line.
//!
//! # Architecture
//!
//! - [`LineStream`]: cursor over one line of text
//! - [`scanner`]: base, string, and block-comment sub-tokenizers
//! - [`ContextStack`]: bracket and `case` contexts carried across lines
//! - [`OkMode`]: the entry points the editor calls, plus [`EditorHints`]
//! - [`Document`]: host-side driver with incremental re-scan, re-indent, and
//!   brace folding
//!
//! Nothing here can fail. Malformed text still produces styles and a
//! consistent state; unterminated strings and comments simply carry over to
//! the next line.

mod config;
mod context;
mod fold;
mod highlight;
mod keywords;
mod mode;
pub mod scanner;
mod state;
mod stream;
mod style;

pub use config::{EditorHints, FoldStrategy, ModeConfig, HINTS};
pub use context::{Context, ContextKind, ContextStack, Delimiter};
pub use fold::{fold_range, FoldRange, Position};
pub use highlight::{highlight_line, reindent, Document, Span};
pub use keywords::{is_atom, is_keyword, ATOMS, KEYWORDS};
pub use mode::{Indent, OkMode, MIME, NAME};
pub use scanner::{Quote, Tokenizer};
pub use state::ScannerState;
pub use stream::{count_column, LineStream};
pub use style::Style;
