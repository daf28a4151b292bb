//! Entry points the editor calls.
//!
//! The editor drives the mode with three calls:
//!
//! 1. [`OkMode::start_state`] once per buffer
//! 2. [`OkMode::token`] once per lexeme, line by line, threading the state
//! 3. [`OkMode::indent`] when it needs the indentation for a new or retyped
//!    line
//!
//! `token` runs the active sub-tokenizer and then applies the lexeme's
//! punctuation marker to the context stack. `indent` reads only the innermost
//! context.

use tracing::trace;

use crate::config::{EditorHints, ModeConfig, HINTS};
use crate::context::{Context, ContextKind, Delimiter};
use crate::scanner::{self, Punct, Tokenizer};
use crate::state::ScannerState;
use crate::stream::LineStream;
use crate::style::Style;

/// Mode name the editor registers.
pub const NAME: &str = "ok";

/// MIME type associated with the mode.
pub const MIME: &str = "text/x-ok";

/// Indentation hint for a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indent {
    /// Indent to this column.
    Column(u32),
    /// The line starts inside a string or comment; keep the editor's default.
    Defer,
}

impl Indent {
    fn at(column: i32) -> Self {
        Indent::Column(u32::try_from(column).unwrap_or(0))
    }
}

/// The `ok` language mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OkMode {
    config: ModeConfig,
}

impl OkMode {
    pub fn new(config: ModeConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> ModeConfig {
        self.config
    }

    /// Static settings for the editor.
    #[inline]
    pub fn hints(&self) -> EditorHints {
        HINTS
    }

    /// Fresh state for a buffer whose text starts at `base_column`.
    pub fn start_state(&self, base_column: u32) -> ScannerState {
        ScannerState::new(to_i32(base_column) - to_i32(self.config.indent_unit))
    }

    /// Stream over `line` using this mode's tab size.
    pub fn stream<'a>(&self, line: &'a str) -> LineStream<'a> {
        LineStream::new(line, self.config.tab_size)
    }

    /// Scan one lexeme and return its style.
    ///
    /// The lexeme is `stream.current()` afterwards. Whitespace runs and
    /// punctuation come back as `None`.
    pub fn token(&self, stream: &mut LineStream<'_>, state: &mut ScannerState) -> Option<Style> {
        stream.begin_lexeme();
        if stream.sol() {
            let ctx = state.contexts.current_mut();
            if ctx.align.is_none() {
                ctx.align = Some(false);
            }
            if ctx.kind == ContextKind::Case {
                ctx.kind = ContextKind::Block(Delimiter::Brace);
            }
            state.indented = to_i32(stream.indentation());
            state.start_of_line = true;
        }
        if stream.eat_space() {
            return None;
        }

        let lexeme = scanner::scan(&mut state.tokenizer, stream);
        if lexeme.style == Some(Style::Comment) {
            return lexeme.style;
        }

        let ctx = state.contexts.current_mut();
        if ctx.align.is_none() {
            ctx.align = Some(true);
        }

        match lexeme.punct {
            Some(Punct::Open(delim)) => {
                let context = Context {
                    indented: state.indented,
                    column: stream.column(),
                    kind: ContextKind::Block(delim),
                    align: None,
                };
                trace!(?delim, column = context.column, depth = state.depth() + 1, "push context");
                state.contexts.push(context);
            }
            Some(Punct::Case) => {
                state.contexts.current_mut().kind = ContextKind::Case;
            }
            Some(Punct::Close(delim)) if state.context().kind == ContextKind::Block(delim) => {
                if let Some(popped) = state.contexts.pop() {
                    trace!(?delim, depth = state.depth(), "pop context");
                    state.indented = popped.indented;
                }
            }
            Some(Punct::Close(_) | Punct::Separator) | None => {}
        }

        state.start_of_line = false;
        lexeme.style
    }

    /// Indentation for a line whose text (after any leading whitespace) is
    /// `text_after`, given the state at the end of the previous line.
    ///
    /// A `case`/`default` line directly under a `case` arm is a sibling arm;
    /// this retags the arm's context back to a plain block.
    pub fn indent(&self, state: &mut ScannerState, text_after: &str) -> Indent {
        if state.tokenizer != Tokenizer::Base {
            return Indent::Defer;
        }
        let text_after = text_after.trim_start();
        let ctx = state.contexts.current_mut();

        if ctx.kind == ContextKind::Case
            && (starts_with_word(text_after, "case") || starts_with_word(text_after, "default"))
        {
            ctx.kind = ContextKind::Block(Delimiter::Brace);
            return Indent::at(ctx.indented);
        }

        let closing = ctx
            .kind
            .closer()
            .is_some_and(|closer| text_after.starts_with(closer));
        if ctx.align == Some(true) {
            Indent::at(to_i32(ctx.column).saturating_add(i32::from(!closing)))
        } else if closing {
            Indent::at(ctx.indented)
        } else {
            Indent::at(ctx.indented.saturating_add(to_i32(self.config.indent_unit)))
        }
    }
}

/// `text` starts with `word` followed by a non-word character or the end.
fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word).is_some_and(|rest| {
        !rest
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    })
}

#[inline]
fn to_i32(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests;
