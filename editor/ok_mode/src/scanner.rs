//! Sub-tokenizers for the `ok` mode.
//!
//! Scanning is split into three mutually exclusive modes, recorded in the
//! state as a [`Tokenizer`] tag:
//!
//! - **Base**: dispatches on the first character of a lexeme
//! - **String**: inside a quoted string, possibly spanning lines
//! - **Comment**: inside a `/* ... */` block comment, possibly spanning lines
//!
//! [`scan`] consumes exactly one lexeme from the stream and reports its style
//! plus an optional punctuation marker. The marker never leaves the mode: it
//! tells the caller which context-stack operation the lexeme triggers.
//!
//! # Design
//!
//! The active mode is plain data, matched on every call, so a state can be
//! cloned, compared, and serialized between lines.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::context::Delimiter;
use crate::keywords;
use crate::stream::LineStream;
use crate::style::Style;

/// Quote character that opened a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quote {
    Double,
    Single,
    /// Backtick strings are raw: backslash is an ordinary character.
    Backtick,
}

impl Quote {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    #[inline]
    const fn as_byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
            Quote::Backtick => b'`',
        }
    }

    #[inline]
    pub const fn is_raw(self) -> bool {
        matches!(self, Quote::Backtick)
    }
}

/// Active sub-tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tokenizer {
    #[default]
    Base,
    InString(Quote),
    InComment,
}

/// Context-stack operation requested by a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Punct {
    Open(Delimiter),
    Close(Delimiter),
    /// `,`, `;`, or `:`. Uncolored, no stack effect.
    Separator,
    /// `case` or `default`.
    Case,
}

impl Punct {
    fn from_char(ch: char) -> Option<Self> {
        if let Some(delim) = Delimiter::from_open(ch) {
            return Some(Punct::Open(delim));
        }
        if let Some(delim) = Delimiter::from_close(ch) {
            return Some(Punct::Close(delim));
        }
        // `.` would belong here too, but it always starts a number.
        matches!(ch, ',' | ';' | ':').then_some(Punct::Separator)
    }
}

/// Result of scanning one lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub(crate) style: Option<Style>,
    pub(crate) punct: Option<Punct>,
}

impl Lexeme {
    #[inline]
    fn styled(style: Style) -> Self {
        Lexeme {
            style: Some(style),
            punct: None,
        }
    }

    #[inline]
    fn punct(punct: Punct) -> Self {
        Lexeme {
            style: None,
            punct: Some(punct),
        }
    }
}

/// Scan one lexeme with the active sub-tokenizer.
///
/// Consumes at least one character unless the stream is already at end of
/// line. May switch `tokenizer` to another mode.
pub(crate) fn scan(tokenizer: &mut Tokenizer, stream: &mut LineStream<'_>) -> Lexeme {
    match *tokenizer {
        Tokenizer::Base => base(tokenizer, stream),
        Tokenizer::InString(quote) => Lexeme::styled(string(tokenizer, stream, quote)),
        Tokenizer::InComment => Lexeme::styled(block_comment(tokenizer, stream)),
    }
}

// ─── Base ──────────────────────────────────────────────────────────────

fn base(tokenizer: &mut Tokenizer, stream: &mut LineStream<'_>) -> Lexeme {
    let Some(ch) = stream.next_char() else {
        return Lexeme {
            style: None,
            punct: None,
        };
    };

    if let Some(quote) = Quote::from_char(ch) {
        *tokenizer = Tokenizer::InString(quote);
        trace!(?quote, "enter string");
        return Lexeme::styled(string(tokenizer, stream, quote));
    }
    if ch.is_ascii_digit() || ch == '.' {
        number(stream, ch);
        return Lexeme::styled(Style::Number);
    }
    if let Some(punct) = Punct::from_char(ch) {
        return Lexeme::punct(punct);
    }
    if ch == '/' {
        if stream.eat_char('*') {
            *tokenizer = Tokenizer::InComment;
            trace!("enter block comment");
            return Lexeme::styled(block_comment(tokenizer, stream));
        }
        if stream.eat_char('/') {
            stream.skip_to_end();
            return Lexeme::styled(Style::Comment);
        }
    }
    if is_operator_char(ch) {
        stream.eat_while(is_operator_char);
        return Lexeme::styled(Style::Operator);
    }
    word(stream)
}

/// Identifier-like run: keyword, atom, or variable.
fn word(stream: &mut LineStream<'_>) -> Lexeme {
    stream.eat_while(is_word_char);

    // `NO!` and `ayok?` end in a character that cannot continue a word.
    if matches!(stream.peek(), Some('!' | '?')) {
        let extended = &stream.line()[stream.start()..=stream.pos()];
        if keywords::is_keyword(extended) || keywords::is_atom(extended) {
            stream.next_char();
        }
    }

    let text = stream.current();
    if keywords::is_keyword(text) {
        return Lexeme {
            style: Some(Style::Keyword),
            punct: keywords::opens_case(text).then_some(Punct::Case),
        };
    }
    if keywords::is_atom(text) {
        return Lexeme::styled(Style::Atom);
    }
    Lexeme::styled(Style::Variable)
}

#[inline]
fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '&' | '^' | '%' | ':' | '=' | '<' | '>' | '!' | '|' | '/'
    )
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ch >= '\u{a1}'
}

// ─── Numbers ───────────────────────────────────────────────────────────

/// Consume the rest of a numeric literal whose first character is `first`.
///
/// Every optional part is all-or-nothing: `1e` scans as `1` followed by the
/// identifier `e`.
fn number(stream: &mut LineStream<'_>, first: char) {
    match first {
        '.' => {
            if stream.eat_while(|c| c.is_ascii_digit()) {
                eat_exponent(stream);
            }
        }
        '0' => {
            let hex = stream.try_match(|s| {
                s.eat(|c| c == 'x' || c == 'X').is_some() && s.eat_while(|c| c.is_ascii_hexdigit())
            });
            if !hex {
                stream.eat_while(|c| matches!(c, '0'..='7'));
            }
        }
        _ => {
            stream.eat_while(|c| c.is_ascii_digit());
            if stream.eat_char('.') {
                stream.eat_while(|c| c.is_ascii_digit());
            }
            eat_exponent(stream);
        }
    }
}

/// `[eE][-+]?[0-9]+`, or nothing.
fn eat_exponent(stream: &mut LineStream<'_>) {
    stream.try_match(|s| {
        if s.eat(|c| c == 'e' || c == 'E').is_none() {
            return false;
        }
        s.eat(|c| c == '-' || c == '+');
        s.eat_while(|c| c.is_ascii_digit())
    });
}

// ─── Strings ───────────────────────────────────────────────────────────

/// Scan string content up to and including the closing quote.
///
/// A string with no closing quote on this line carries over: the string mode
/// stays active and the next line continues inside it. Escapes only matter
/// within a line; a backslash never escapes the line break.
fn string(tokenizer: &mut Tokenizer, stream: &mut LineStream<'_>, quote: Quote) -> Style {
    let delim = quote.as_byte();
    loop {
        let found = if quote.is_raw() {
            stream.skip_to(delim).then_some(delim)
        } else {
            stream.skip_to_either(delim, b'\\')
        };
        match found {
            Some(b'\\') => {
                stream.next_char();
                // The escaped character is literal, even if it is the quote.
                stream.next_char();
            }
            Some(_) => {
                stream.next_char();
                *tokenizer = Tokenizer::Base;
                trace!(?quote, "leave string");
                return Style::String;
            }
            None => {
                trace!(?quote, "string continues on next line");
                return Style::String;
            }
        }
    }
}

// ─── Block Comments ────────────────────────────────────────────────────

/// Scan comment content up to and including `*/`.
///
/// Without a terminator the whole rest of the line is comment and the mode
/// carries over. A `*` at the end of one line and `/` at the start of the
/// next do not close the comment.
fn block_comment(tokenizer: &mut Tokenizer, stream: &mut LineStream<'_>) -> Style {
    while stream.skip_to(b'*') {
        stream.next_char();
        if stream.eat_char('/') {
            *tokenizer = Tokenizer::Base;
            trace!("leave block comment");
            break;
        }
    }
    Style::Comment
}
