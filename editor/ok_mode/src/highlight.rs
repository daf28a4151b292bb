//! Host-side driver: per-line highlighting with incremental re-scan.
//!
//! The editor normally owns this loop. [`Document`] reproduces it for hosts
//! that do not (the CLI, tests, a server-side renderer): it keeps the text
//! line by line, with each line's spans and the scanner state before and
//! after it.
//!
//! # Incremental re-scan
//!
//! After an edit, lines are re-scanned starting at the first changed line.
//! Once every changed line has been re-scanned, scanning stops at the first
//! line whose cached input state equals the freshly computed one. Everything
//! below that point would scan identically, so its spans stay valid.

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::mode::{Indent, OkMode};
use crate::state::ScannerState;
use crate::style::Style;

/// One lexeme on a line, as byte offsets into the line text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: Option<Style>,
}

/// Scan `line` to the end, returning one span per lexeme.
///
/// Empty lines are not scanned at all, so they leave `state` untouched.
pub fn highlight_line(mode: &OkMode, line: &str, state: &mut ScannerState) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut stream = mode.stream(line);
    while !stream.eol() {
        let style = mode.token(&mut stream, state);
        spans.push(Span {
            start: stream.start(),
            end: stream.pos(),
            style,
        });
    }
    spans
}

#[derive(Clone, Debug)]
struct Line {
    text: String,
    spans: Vec<Span>,
    state_before: ScannerState,
    state_after: ScannerState,
}

/// A buffer with cached highlighting.
#[derive(Clone, Debug)]
pub struct Document {
    mode: OkMode,
    lines: Vec<Line>,
}

impl Document {
    /// Split `text` into lines and scan all of them.
    ///
    /// Lines are separated by `\n`; a trailing `\r` on a line is dropped.
    pub fn new(mode: OkMode, text: &str) -> Self {
        let placeholder = mode.start_state(0);
        let lines: Vec<Line> = split_lines(text)
            .map(|text| Line {
                text: text.to_owned(),
                spans: Vec::new(),
                state_before: placeholder.clone(),
                state_after: placeholder.clone(),
            })
            .collect();
        let count = lines.len();
        let mut document = Self { mode, lines };
        document.rescan(0, count);
        document
    }

    #[inline]
    pub fn mode(&self) -> &OkMode {
        &self.mode
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.text.as_str())
    }

    pub fn spans(&self, index: usize) -> Option<&[Span]> {
        self.lines.get(index).map(|line| line.spans.as_slice())
    }

    /// State after the last lexeme of line `index`.
    pub fn state_after(&self, index: usize) -> Option<&ScannerState> {
        self.lines.get(index).map(|line| &line.state_after)
    }

    /// State the scanner is in when line `index` starts.
    ///
    /// For `index == line_count()` this is the state at the end of the
    /// document.
    pub fn state_before(&self, index: usize) -> ScannerState {
        match index.checked_sub(1).and_then(|prev| self.lines.get(prev)) {
            Some(prev) => prev.state_after.clone(),
            None => self.mode.start_state(0),
        }
    }

    /// Text with lines joined by `\n`.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        texts.join("\n")
    }

    /// Replace line `index` and return the lines that were re-scanned.
    ///
    /// Out-of-range indices change nothing and return an empty range.
    pub fn edit_line(&mut self, index: usize, text: &str) -> Range<usize> {
        let Some(line) = self.lines.get_mut(index) else {
            return index..index;
        };
        text.clone_into(&mut line.text);
        self.rescan(index, index + 1)
    }

    /// Insert a line before `index` (or append when `index == line_count()`).
    pub fn insert_line(&mut self, index: usize, text: &str) -> Range<usize> {
        let index = index.min(self.lines.len());
        let placeholder = self.state_before(index);
        self.lines.insert(
            index,
            Line {
                text: text.to_owned(),
                spans: Vec::new(),
                state_before: placeholder.clone(),
                state_after: placeholder,
            },
        );
        self.rescan(index, index + 1)
    }

    /// Remove line `index`, if it exists.
    pub fn remove_line(&mut self, index: usize) -> Range<usize> {
        if index >= self.lines.len() {
            return index..index;
        }
        self.lines.remove(index);
        self.rescan(index, index)
    }

    /// Indentation for line `index` from the state before it.
    pub fn indent_line(&self, index: usize) -> Indent {
        let text = self.line(index).unwrap_or("");
        let mut state = self.state_before(index);
        self.mode.indent(&mut state, text)
    }

    /// Re-scan from line `from`. Lines in `from..dirty_end` are always
    /// re-scanned; after that, scanning stops as soon as a line's cached input
    /// state matches.
    fn rescan(&mut self, from: usize, dirty_end: usize) -> Range<usize> {
        let mut state = self.state_before(from);
        let mut index = from;
        while let Some(line) = self.lines.get_mut(index) {
            if index >= dirty_end && line.state_before == state {
                break;
            }
            line.state_before.clone_from(&state);
            line.spans = highlight_line(&self.mode, &line.text, &mut state);
            line.state_after.clone_from(&state);
            index += 1;
        }
        debug!(
            from,
            to = index,
            total = self.lines.len(),
            "rescanned lines"
        );
        from..index
    }
}

/// Re-indent every line of `text` and return the result.
///
/// Lines are indented with spaces from the state left by the already
/// re-indented lines above them. Blank lines become empty; lines starting
/// inside a string or comment keep their text unchanged.
pub fn reindent(mode: &OkMode, text: &str) -> String {
    let mut state = mode.start_state(0);
    let mut out: Vec<String> = Vec::new();
    for line in split_lines(text) {
        let body = line.trim_start();
        let reindented = match mode.indent(&mut state, body) {
            Indent::Defer => line.to_owned(),
            Indent::Column(_) if body.is_empty() => String::new(),
            Indent::Column(column) => {
                let width = usize::try_from(column).unwrap_or(0);
                format!("{}{body}", " ".repeat(width))
            }
        };
        highlight_line(mode, &reindented, &mut state);
        out.push(reindented);
    }
    out.join("\n")
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
