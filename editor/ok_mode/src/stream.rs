//! Cursor over a single line of editor text.
//!
//! The host hands the mode one line at a time. `LineStream` keeps two byte
//! offsets into that line: `start`, where the lexeme being scanned began, and
//! `pos`, how far scanning has progressed. Offsets always sit on UTF-8
//! character boundaries.
//!
//! Columns are not byte offsets. [`column()`](LineStream::column) and
//! [`indentation()`](LineStream::indentation) count characters and expand
//! tabs to the next multiple of the tab size, so they match what the editor
//! renders.

/// Visual column of byte offset `end` in `text`, expanding tabs.
///
/// `end` is clamped to the text length and must fall on a character
/// boundary. The count saturates at `u32::MAX`.
pub fn count_column(text: &str, end: usize, tab_size: u32) -> u32 {
    let tab_size = tab_size.max(1);
    let end = end.min(text.len());
    let mut column: u32 = 0;
    for ch in text[..end].chars() {
        if ch == '\t' {
            column = column.saturating_add(tab_size - column % tab_size);
        } else {
            column = column.saturating_add(1);
        }
    }
    column
}

/// Cursor over one line, consumed lexeme by lexeme.
#[derive(Clone, Debug)]
pub struct LineStream<'a> {
    line: &'a str,
    pos: usize,
    start: usize,
    tab_size: u32,
}

impl<'a> LineStream<'a> {
    /// Create a cursor at the beginning of `line`.
    ///
    /// A `tab_size` of zero is treated as one.
    pub fn new(line: &'a str, tab_size: u32) -> Self {
        Self {
            line,
            pos: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// The full line text.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Byte offset of the scan position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current lexeme began.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns `true` while nothing on the line has been consumed.
    #[inline]
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// Returns `true` once the whole line has been consumed.
    #[inline]
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Mark the scan position as the start of a new lexeme.
    #[inline]
    pub fn begin_lexeme(&mut self) {
        self.start = self.pos;
    }

    /// Text of the current lexeme (`start..pos`).
    #[inline]
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character if `pred` accepts it.
    #[inline]
    pub fn eat(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.pos += ch.len_utf8();
                Some(ch)
            }
            _ => None,
        }
    }

    /// Consume `expected` if it is the next character.
    #[inline]
    pub fn eat_char(&mut self, expected: char) -> bool {
        self.eat(|ch| ch == expected).is_some()
    }

    /// Advance while `pred` accepts the next character.
    ///
    /// Returns `true` if at least one character was consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let before = self.pos;
        while self.eat(&pred).is_some() {}
        self.pos > before
    }

    /// Advance past whitespace. Returns `true` if any was consumed.
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Run `pattern` as an all-or-nothing match.
    ///
    /// If `pattern` returns `false`, the cursor is restored to where it was,
    /// so a partial match consumes nothing.
    pub fn try_match(&mut self, pattern: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.pos;
        if pattern(self) {
            true
        } else {
            self.pos = saved;
            false
        }
    }

    /// Consume the rest of the line.
    #[inline]
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Advance to the next occurrence of the ASCII byte `needle`.
    ///
    /// Leaves the cursor on the byte and returns `true`, or moves to the end
    /// of the line and returns `false`. An ASCII byte never occurs inside a
    /// multi-byte UTF-8 sequence, so the cursor stays on a char boundary.
    pub fn skip_to(&mut self, needle: u8) -> bool {
        debug_assert!(needle.is_ascii(), "skip_to needle must be ASCII");
        if let Some(offset) = memchr::memchr(needle, self.rest().as_bytes()) {
            self.pos += offset;
            true
        } else {
            self.skip_to_end();
            false
        }
    }

    /// Advance to the nearest of two ASCII bytes and return the one found.
    ///
    /// Returns `None` (cursor at end of line) when neither occurs.
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> Option<u8> {
        debug_assert!(a.is_ascii() && b.is_ascii(), "skip_to_either needles must be ASCII");
        let remaining = self.rest().as_bytes();
        if let Some(offset) = memchr::memchr2(a, b, remaining) {
            let found = remaining[offset];
            self.pos += offset;
            Some(found)
        } else {
            self.skip_to_end();
            None
        }
    }

    /// Visual column where the current lexeme starts.
    pub fn column(&self) -> u32 {
        count_column(self.line, self.start, self.tab_size)
    }

    /// Visual width of the line's leading whitespace.
    ///
    /// A whitespace-only line is all indentation.
    pub fn indentation(&self) -> u32 {
        let end = self
            .line
            .find(|ch: char| !ch.is_whitespace())
            .unwrap_or(self.line.len());
        count_column(self.line, end, self.tab_size)
    }
}
