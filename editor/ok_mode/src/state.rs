//! Per-buffer scanner state.

use serde::{Deserialize, Serialize};

use crate::context::{Context, ContextStack};
use crate::scanner::Tokenizer;

/// Everything the mode carries from one lexeme, and one line, to the next.
///
/// Created by [`OkMode::start_state`](crate::OkMode::start_state) and owned by
/// a single editor buffer. States are plain values: hosts that re-scan
/// incrementally keep a clone per line and compare them to find where an edit
/// stops having an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerState {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) contexts: ContextStack,
    /// Indentation of the current line, or of the block a closer on this
    /// line returned to.
    pub(crate) indented: i32,
    pub(crate) start_of_line: bool,
}

impl ScannerState {
    pub(crate) fn new(base_indent: i32) -> Self {
        Self {
            tokenizer: Tokenizer::Base,
            contexts: ContextStack::new(base_indent),
            indented: 0,
            start_of_line: true,
        }
    }

    /// Active sub-tokenizer.
    #[inline]
    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// The innermost context.
    #[inline]
    pub fn context(&self) -> &Context {
        self.contexts.current()
    }

    #[inline]
    pub fn contexts(&self) -> &ContextStack {
        &self.contexts
    }

    /// Open contexts above the sentinel.
    #[inline]
    pub fn depth(&self) -> usize {
        self.contexts.depth()
    }

    #[inline]
    pub fn indented(&self) -> i32 {
        self.indented
    }

    /// `true` until the first non-whitespace lexeme of the current line.
    #[inline]
    pub fn is_start_of_line(&self) -> bool {
        self.start_of_line
    }
}
