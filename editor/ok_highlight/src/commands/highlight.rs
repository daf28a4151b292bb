use std::fmt::Write as _;

use ok_mode::{Document, OkMode, Span};
use serde::Serialize;
use tracing::debug;

use super::{read_file, Options};
use crate::CliError;

#[derive(Serialize)]
struct JsonLine<'a> {
    line: usize,
    spans: &'a [Span],
}

/// `okhl highlight <file>`
pub fn highlight_file(path: &str, options: Options) -> Result<String, CliError> {
    let source = read_file(path)?;
    let doc = Document::new(OkMode::new(options.config), &source);
    debug!(path, lines = doc.line_count(), "highlighted");
    if options.json {
        render_json(&doc)
    } else {
        Ok(render_text(&doc))
    }
}

/// One lexeme per output line as `line:start..end style "text"`.
///
/// Lines are numbered from 1; offsets are bytes. Whitespace runs are skipped
/// and uncolored lexemes print `-` as their style.
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();
    for index in 0..doc.line_count() {
        let (Some(text), Some(spans)) = (doc.line(index), doc.spans(index)) else {
            continue;
        };
        for span in spans {
            let lexeme = &text[span.start..span.end];
            if lexeme.trim().is_empty() {
                continue;
            }
            let style = span.style.map_or("-", |style| style.as_str());
            let _ = writeln!(
                out,
                "{}:{}..{} {style} {lexeme:?}",
                index + 1,
                span.start,
                span.end
            );
        }
    }
    out
}

/// All spans as a JSON array of `{ "line", "spans" }` objects.
pub fn render_json(doc: &Document) -> Result<String, CliError> {
    let lines: Vec<JsonLine<'_>> = (0..doc.line_count())
        .filter_map(|index| {
            doc.spans(index).map(|spans| JsonLine {
                line: index + 1,
                spans,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&lines)?)
}
