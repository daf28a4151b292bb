//! Brace folding.
//!
//! A line whose last uncolored `{` is closed on a later line can be folded.
//! The folded range runs from just after that `{` to just before its `}`.
//! Braces inside strings and comments are colored spans, so they never count.

use serde::Serialize;

use crate::highlight::{Document, Span};

/// A position in a [`Document`]: line index and byte offset in the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Text hidden when a block is folded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FoldRange {
    pub from: Position,
    pub to: Position,
}

/// Foldable range opened on `line`, if any.
pub fn fold_range(doc: &Document, line: usize) -> Option<FoldRange> {
    let text = doc.line(line)?;
    let open = doc
        .spans(line)?
        .iter()
        .rev()
        .find(|span| brace(text, span) == Some('{'))?;

    let mut depth = 0usize;
    let mut first = true;
    for index in line..doc.line_count() {
        let text = doc.line(index)?;
        let spans = doc.spans(index)?;
        let rest = if first {
            first = false;
            let after = spans.iter().position(|span| span == open)? + 1;
            &spans[after..]
        } else {
            spans
        };
        for span in rest {
            match brace(text, span) {
                Some('{') => depth += 1,
                Some('}') if depth == 0 => {
                    // Closed on the opening line: nothing to fold.
                    return (index > line).then_some(FoldRange {
                        from: Position {
                            line,
                            column: open.end,
                        },
                        to: Position {
                            line: index,
                            column: span.start,
                        },
                    });
                }
                Some('}') => depth -= 1,
                _ => {}
            }
        }
    }
    None
}

/// The brace an uncolored span consists of.
fn brace(text: &str, span: &Span) -> Option<char> {
    if span.style.is_some() {
        return None;
    }
    match text.get(span.start..span.end)? {
        "{" => Some('{'),
        "}" => Some('}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
