use pretty_assertions::assert_eq;

use super::*;
use crate::OkMode;

fn doc(text: &str) -> Document {
    Document::new(OkMode::default(), text)
}

fn range(from: (usize, usize), to: (usize, usize)) -> FoldRange {
    FoldRange {
        from: Position {
            line: from.0,
            column: from.1,
        },
        to: Position {
            line: to.0,
            column: to.1,
        },
    }
}

#[test]
fn block_folds_to_its_closer() {
    let doc = doc("if x {\n  y\n}");
    assert_eq!(fold_range(&doc, 0), Some(range((0, 6), (2, 0))));
}

#[test]
fn nested_blocks_are_skipped() {
    let doc = doc("fn() {\n  if a {\n    b\n  }\n}");
    assert_eq!(fold_range(&doc, 0), Some(range((0, 6), (4, 0))));
    assert_eq!(fold_range(&doc, 1), Some(range((1, 8), (3, 2))));
}

#[test]
fn last_brace_on_the_line_wins() {
    let doc = doc("let a = {}; if x {\n}");
    assert_eq!(fold_range(&doc, 0), Some(range((0, 18), (1, 0))));
}

#[test]
fn same_line_block_does_not_fold() {
    assert_eq!(fold_range(&doc("if x { y }"), 0), None);
}

#[test]
fn unclosed_block_does_not_fold() {
    assert_eq!(fold_range(&doc("if x {\n  y"), 0), None);
}

#[test]
fn line_without_brace_does_not_fold() {
    assert_eq!(fold_range(&doc("foo(\n)"), 0), None);
    assert_eq!(fold_range(&doc("x"), 5), None);
}

#[test]
fn braces_in_strings_and_comments_do_not_count() {
    let doc = doc("if x {\n  \"}\" // }\n  /* } */\n}");
    assert_eq!(fold_range(&doc, 0), Some(range((0, 6), (3, 0))));
    assert_eq!(fold_range(&doc, 1), None);
}
