use pretty_assertions::assert_eq;

use super::*;
use crate::scanner::Quote;

fn mode() -> OkMode {
    OkMode::default()
}

/// Tokenize `line` into (lexeme, style) pairs, dropping whitespace.
fn tokens<'a>(
    mode: &OkMode,
    line: &'a str,
    state: &mut ScannerState,
) -> Vec<(&'a str, Option<Style>)> {
    let mut stream = mode.stream(line);
    let mut out = Vec::new();
    while !stream.eol() {
        let style = mode.token(&mut stream, state);
        let text = stream.current();
        if !text.trim().is_empty() {
            out.push((text, style));
        }
    }
    out
}

/// Run every line through the mode and return the final state.
fn scan_lines(mode: &OkMode, lines: &[&str]) -> ScannerState {
    let mut state = mode.start_state(0);
    for line in lines {
        tokens(mode, line, &mut state);
    }
    state
}

fn column(indent: Indent) -> u32 {
    match indent {
        Indent::Column(column) => column,
        Indent::Defer => panic!("expected a column, got Defer"),
    }
}

// === Start state ===

#[test]
fn start_state_has_sentinel_below_base() {
    let state = OkMode::new(ModeConfig {
        indent_unit: 4,
        tab_size: 4,
    })
    .start_state(8);
    assert_eq!(state.tokenizer(), Tokenizer::Base);
    assert_eq!(state.depth(), 0);
    assert_eq!(state.context().kind, ContextKind::Top);
    assert_eq!(state.context().indented, 4);
    assert!(state.is_start_of_line());
}

#[test]
fn top_level_lines_indent_to_base_column() {
    let mode = mode();
    let mut state = mode.start_state(0);
    assert_eq!(mode.indent(&mut state, "let x = 1;"), Indent::Column(0));
    let mut state = mode.start_state(6);
    assert_eq!(mode.indent(&mut state, "x"), Indent::Column(6));
}

// === Tokens ===

#[test]
fn let_statement() {
    let mode = mode();
    let mut state = mode.start_state(0);
    assert_eq!(
        tokens(&mode, "let x = 1;", &mut state),
        vec![
            ("let", Some(Style::Keyword)),
            ("x", Some(Style::Variable)),
            ("=", Some(Style::Operator)),
            ("1", Some(Style::Number)),
            (";", None),
        ]
    );
    assert_eq!(state.depth(), 0);
}

#[test]
fn whitespace_is_one_uncolored_lexeme() {
    let mode = mode();
    let mut state = mode.start_state(0);
    let mut stream = mode.stream("   x");
    assert_eq!(mode.token(&mut stream, &mut state), None);
    assert_eq!(stream.current(), "   ");
    assert!(state.is_start_of_line());
    assert_eq!(mode.token(&mut stream, &mut state), Some(Style::Variable));
    assert!(!state.is_start_of_line());
}

#[test]
fn line_indentation_is_recorded() {
    let mode = mode();
    let mut state = mode.start_state(0);
    tokens(&mode, "    x", &mut state);
    assert_eq!(state.indented(), 4);
    tokens(&mode, "\ty", &mut state);
    assert_eq!(state.indented(), 4);
    tokens(&mode, "z", &mut state);
    assert_eq!(state.indented(), 0);
}

#[test]
fn unterminated_string_spans_lines() {
    let mode = mode();
    let mut state = mode.start_state(0);
    tokens(&mode, r#""abc"#, &mut state);
    assert_eq!(state.tokenizer(), Tokenizer::InString(Quote::Double));

    assert_eq!(
        tokens(&mode, "fn { ( let", &mut state),
        vec![("fn { ( let", Some(Style::String))]
    );
    assert_eq!(state.depth(), 0);

    assert_eq!(
        tokens(&mode, r#"end" x"#, &mut state),
        vec![(r#"end""#, Some(Style::String)), ("x", Some(Style::Variable))]
    );
    assert_eq!(state.tokenizer(), Tokenizer::Base);
}

// === Context stack ===

#[test]
fn balanced_brackets_leave_no_contexts() {
    let state = scan_lines(&mode(), &["fn(a, [b, {c: (d)}]) {", "  x", "}"]);
    assert_eq!(state.depth(), 0);
}

#[test]
fn unbalanced_openers_stay_open() {
    let state = scan_lines(&mode(), &["foo(bar[", "{"]);
    assert_eq!(state.depth(), 3);
    assert_eq!(state.context().kind, ContextKind::Block(Delimiter::Brace));
}

#[test]
fn stray_closers_are_ignored() {
    let state = scan_lines(&mode(), &[") ] }", "x"]);
    assert_eq!(state.depth(), 0);
    assert_eq!(state.context().kind, ContextKind::Top);
}

#[test]
fn mismatched_closer_does_not_pop() {
    let state = scan_lines(&mode(), &["foo(]"]);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.context().kind, ContextKind::Block(Delimiter::Paren));
}

#[test]
fn brackets_in_strings_and_comments_are_ignored() {
    let state = scan_lines(&mode(), &[r#"x = "{(" // {"#, "/* [ */ y"]);
    assert_eq!(state.depth(), 0);
}

#[test]
fn pushed_context_records_line_indent_and_column() {
    let mode = mode();
    let state = scan_lines(&mode, &["    let f = fn(x) {"]);
    let ctx = state.context();
    assert_eq!(ctx.kind, ContextKind::Block(Delimiter::Brace));
    assert_eq!(ctx.indented, 4);
    assert_eq!(ctx.column, 18);
}

#[test]
fn pop_restores_indentation_of_opening_line() {
    let mode = mode();
    let mut state = mode.start_state(0);
    tokens(&mode, "if x {", &mut state);
    tokens(&mode, "      y }", &mut state);
    assert_eq!(state.indented(), 0);
}

// === Align ===

#[test]
fn align_true_when_content_follows_opener() {
    let state = scan_lines(&mode(), &["foo(a,"]);
    assert_eq!(state.context().align, Some(true));
}

#[test]
fn align_unknown_until_next_line_starts() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["foo("]);
    assert_eq!(state.context().align, None);
    tokens(&mode, "a", &mut state);
    assert_eq!(state.context().align, Some(false));
}

#[test]
fn comment_after_opener_does_not_resolve_align() {
    let state = scan_lines(&mode(), &["foo( // args"]);
    assert_eq!(state.context().align, None);
}

// === Indentation ===

#[test]
fn brace_alone_indents_one_unit() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["{"]);
    assert_eq!(mode.indent(&mut state.clone(), "x"), Indent::Column(2));
    assert_eq!(mode.indent(&mut state, "}"), Indent::Column(0));
}

#[test]
fn closing_line_returns_to_block_start_not_bracket_column() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["  let f = fn(x) {"]);
    assert_eq!(mode.indent(&mut state.clone(), "return x;"), Indent::Column(4));
    assert_eq!(mode.indent(&mut state, "  }"), Indent::Column(2));
}

#[test]
fn aligned_continuation_uses_bracket_column() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["puts(first,"]);
    assert_eq!(mode.indent(&mut state.clone(), "second)"), Indent::Column(5));
    assert_eq!(mode.indent(&mut state, ")"), Indent::Column(4));
}

#[test]
fn indent_unit_is_configurable() {
    let mode = OkMode::new(ModeConfig {
        indent_unit: 4,
        tab_size: 4,
    });
    assert_eq!(mode.config().indent_unit, 4);
    let mut state = scan_lines(&mode, &["if x {"]);
    assert_eq!(column(mode.indent(&mut state, "y")), 4);
}

#[test]
fn nested_blocks_indent_cumulatively() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["fn() {", "  if x {"]);
    assert_eq!(column(mode.indent(&mut state.clone(), "y")), 4);
    assert_eq!(column(mode.indent(&mut state, "}")), 2);
}

#[test]
fn indent_defers_inside_string_and_comment() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["x = `multi"]);
    assert_eq!(mode.indent(&mut state, "line"), Indent::Defer);

    let mut state = scan_lines(&mode, &["/* open"]);
    assert_eq!(mode.indent(&mut state, "*/"), Indent::Defer);
}

#[test]
fn leading_whitespace_of_next_line_is_ignored() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["{"]);
    assert_eq!(mode.indent(&mut state, "     }"), Indent::Column(0));
}

#[test]
fn base_column_below_indent_unit() {
    let mode = OkMode::new(ModeConfig {
        indent_unit: 4,
        tab_size: 4,
    });
    let mut state = mode.start_state(1);
    tokens(&mode, "x", &mut state);
    assert_eq!(state.contexts().iter().next().map(|c| c.indented), Some(-3));
    assert_eq!(mode.indent(&mut state, "x"), Indent::Column(1));
}

// === Switch / case ===

#[test]
fn case_retags_current_context() {
    let mode = mode();
    let state = scan_lines(&mode, &["switch x {", "case 1: y"]);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.context().kind, ContextKind::Case);
}

#[test]
fn case_context_resets_at_next_line() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["switch x {", "case 1: y"]);
    tokens(&mode, "z", &mut state);
    assert_eq!(state.context().kind, ContextKind::Block(Delimiter::Brace));
}

#[test]
fn sibling_case_indents_like_first_case() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["switch x { case true: foo(); }"]);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.context().kind, ContextKind::Case);

    assert_eq!(
        mode.indent(&mut state, "case false: bar();"),
        Indent::Column(0)
    );
    assert_eq!(state.context().kind, ContextKind::Block(Delimiter::Brace));

    tokens(&mode, "case false: bar();", &mut state);
    assert_eq!(state.depth(), 1);
    assert_eq!(state.context().kind, ContextKind::Case);
}

#[test]
fn sibling_case_without_indent_call() {
    let mode = mode();
    let state = scan_lines(
        &mode,
        &["switch x { case true: foo(); }", "case false: bar();", "default: baz();"],
    );
    assert_eq!(state.depth(), 1);
    assert_eq!(state.context().kind, ContextKind::Case);
}

#[test]
fn case_prefix_must_be_a_whole_word() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["switch x {", "  case 1: y"]);
    assert_eq!(state.context().kind, ContextKind::Case);
    // `cases` is an identifier, so it indents as body text.
    assert_eq!(mode.indent(&mut state, "cases"), Indent::Column(2));
    assert_eq!(state.context().kind, ContextKind::Case);
}

#[test]
fn default_is_a_sibling_too() {
    let mode = mode();
    let mut state = scan_lines(&mode, &["switch x {", "  case 1: y"]);
    assert_eq!(mode.indent(&mut state, "default: z"), Indent::Column(0));
}

#[test]
fn starts_with_word_boundaries() {
    assert!(starts_with_word("case", "case"));
    assert!(starts_with_word("case:", "case"));
    assert!(starts_with_word("case x", "case"));
    assert!(!starts_with_word("case_x", "case"));
    assert!(!starts_with_word("cased", "case"));
    assert!(!starts_with_word("cas", "case"));
}

// === Hints ===

#[test]
fn mode_exposes_static_hints() {
    let hints = mode().hints();
    assert_eq!(hints.name, "ok");
    assert_eq!(hints.mime, "text/x-ok");
    assert_eq!(hints.line_comment, "//");
}
