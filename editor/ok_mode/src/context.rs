//! Bracket and `case` contexts.
//!
//! Each open `{`, `[`, or `(` pushes a [`Context`] recording where its line
//! began and where the bracket sits; the matching closer pops it. A `switch`
//! arm does not push: the `case`/`default` keyword retags the current context
//! as [`ContextKind::Case`] until the next line starts.
//!
//! The stack is strictly nested, so it is stored contiguously. The bottom
//! entry is a `Top` sentinel that is never popped; unbalanced input simply
//! leaves extra contexts above it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Bracket pair that opens a block context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub fn from_open(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn from_close(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Delimiter::Paren),
            ']' => Some(Delimiter::Bracket),
            '}' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub const fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

/// What a context was opened by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    /// The sentinel at the bottom of every stack.
    Top,
    /// A `switch` arm after `case`/`default`, until the line ends.
    Case,
    /// An open bracket, closed by its delimiter's closer.
    Block(Delimiter),
}

impl ContextKind {
    /// Character that closes this context, if any.
    pub const fn closer(self) -> Option<char> {
        match self {
            ContextKind::Block(delim) => Some(delim.close()),
            ContextKind::Top | ContextKind::Case => None,
        }
    }
}

/// One stack frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Indentation of the line the context was opened on.
    ///
    /// Negative only for the sentinel of a state started at a base column
    /// smaller than the indent unit.
    pub indented: i32,
    /// Column of the opening bracket.
    pub column: u32,
    pub kind: ContextKind,
    /// Whether content continues on the opening line after the bracket.
    ///
    /// `None` until the first token after the opener, or until the next line
    /// starts, whichever comes first.
    pub align: Option<bool>,
}

/// Contexts from the sentinel up to the innermost open bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextStack {
    top: Context,
    open: SmallVec<[Context; 8]>,
}

impl ContextStack {
    /// Stack holding only the sentinel, indented at `base_indent`.
    pub fn new(base_indent: i32) -> Self {
        Self {
            top: Context {
                indented: base_indent,
                column: 0,
                kind: ContextKind::Top,
                align: Some(false),
            },
            open: SmallVec::new(),
        }
    }

    /// The innermost context.
    #[inline]
    pub fn current(&self) -> &Context {
        self.open.last().unwrap_or(&self.top)
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Context {
        self.open.last_mut().unwrap_or(&mut self.top)
    }

    /// Number of contexts above the sentinel.
    #[inline]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn push(&mut self, context: Context) {
        self.open.push(context);
    }

    /// Pop the innermost context. The sentinel stays put.
    pub fn pop(&mut self) -> Option<Context> {
        self.open.pop()
    }

    /// Contexts from the sentinel to the innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        std::iter::once(&self.top).chain(self.open.iter())
    }
}
