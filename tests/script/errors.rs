//! Integration tests for syntax error reporting.
//!
//! Every error must carry a 1-based line/column pointing at the offending
//! token, because editors jump straight to that position.

use irobo_foundation::Error;
use irobo_script::{parse, parse_with_locale};
use irobo_translations::Locale;

fn parse_err(source: &str) -> Error {
    parse(source).unwrap_err()
}

#[test]
fn builtin_assignment_points_at_the_target() {
    let err = parse_err("forward = 1");
    assert_eq!(err.position(), Some((1, 1)));
    assert!(err.to_string().contains("cannot assign to built-in word"));

    let err = parse_with_locale("waar = 1", Locale::Nl).unwrap_err();
    assert!(err.to_string().contains("'waar'"));
}

#[test]
fn else_needs_a_conditional() {
    let err = parse_err("else { forward }");
    assert_eq!(err.position(), Some((1, 1)));
    assert!(err.to_string().contains("without a matching 'if'"));
}

#[test]
fn break_needs_a_loop() {
    let err = parse_err("if (1) { break }");
    assert!(err.to_string().contains("outside of a loop"));
}

#[test]
fn unterminated_block_points_at_the_open_brace() {
    let err = parse_err("repeat {\n    forward\n");
    assert_eq!(err.position(), Some((1, 8)));
    assert!(err.to_string().contains("unterminated block"));
}

#[test]
fn stray_tokens_report_expected_and_found() {
    let err = parse_err("forward )");
    assert_eq!(err.position(), Some((1, 9)));
    assert_eq!(
        err.expectation().as_deref(),
        Some("expected a statement, found ')'")
    );
}

#[test]
fn repeat_rejects_a_second_count() {
    let err = parse_err("repeat(1, 2) { forward }");
    assert_eq!(err.position(), Some((1, 9)));
    assert!(err.to_string().contains("single count"));
}

#[test]
fn lexer_errors_surface_as_syntax_errors() {
    let err = parse_err("a = 2 * 3");
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 7)));
    assert!(err.to_string().contains("unexpected character '*'"));
}

#[test]
fn keywords_are_rejected_in_value_position() {
    let err = parse_err("x = if");
    assert!(err.to_string().contains("cannot be used as a value"));

    let err = parse_with_locale("noord(einde)", Locale::Nl).unwrap_err();
    assert!(err.to_string().contains("'einde'"));
}

#[test]
fn reserved_procedure_names_are_rejected() {
    let err = parse_err("procedure forward { nop }");
    assert!(err.to_string().contains("cannot be used as a procedure name"));

    let err = parse_with_locale("proseduere stap(foarút) { neat }", Locale::Fy).unwrap_err();
    assert!(err.to_string().contains("cannot be used as a parameter name"));
}

#[test]
fn positions_track_across_lines() {
    let err = parse_err("forward\nright\nrepeat(1, 2) { }");
    assert_eq!(err.position(), Some((3, 9)));
}
