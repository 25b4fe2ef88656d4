//! Record grammar: `name@x,y` placements and `(color,stroke,x,y)` paint marks.

use irobo_foundation::Error;
use irobo_map::parse;

fn parse_err(source: &str) -> Error {
    parse(source).expect_err("map should be rejected")
}

// ============================================================================
// Placements
// ============================================================================

#[test]
fn placements_parse_names_and_coordinates() {
    let ast = parse("extra:\nrobot@0,0\nold oak@12,340\n").expect("map should parse");
    assert_eq!(ast.extra.len(), 2);
    assert_eq!(ast.extra[0].name, "robot");
    assert_eq!((ast.extra[0].x, ast.extra[0].y), (0, 0));
    assert_eq!(ast.extra[1].name, "old oak");
    assert_eq!((ast.extra[1].x, ast.extra[1].y), (12, 340));
}

#[test]
fn placements_without_a_separator_report_the_expectation() {
    let err = parse_err("extra:\nrock\n");
    assert_eq!(err.position(), Some((2, 1)));
    assert_eq!(
        err.expectation().as_deref(),
        Some("expected a placement 'name@x,y', found 'rock'")
    );
}

#[test]
fn placement_names_must_not_be_empty() {
    let err = parse_err("extra:\n@3,4\n");
    assert_eq!(err.position(), Some((2, 1)));
    assert!(err.to_string().contains("placement name is empty"));
}

#[test]
fn placement_errors_point_into_the_line() {
    // Column arithmetic: "beacon@" is seven characters, so x starts at
    // column 8 and y follows the comma.
    let err = parse_err("extra:\nbeacon@here,2\n");
    assert_eq!(err.position(), Some((2, 8)));
    assert!(err.to_string().contains("invalid coordinate 'here'"));

    let err = parse_err("extra:\nbeacon@10,x\n");
    assert_eq!(err.position(), Some((2, 11)));

    let err = parse_err("extra:\nbeacon@10\n");
    assert_eq!(err.position(), Some((2, 8)));
    assert_eq!(
        err.expectation().as_deref(),
        Some("expected coordinates 'x,y', found '10'")
    );
}

// ============================================================================
// Paint marks
// ============================================================================

#[test]
fn every_code_pair_resolves_to_canonical_names() {
    let ast = parse("paint:\n(w,.,1,2)\n(b,-,3,4)\n(w,|,5,6)\n").expect("map should parse");
    let named: Vec<_> = ast
        .paint
        .iter()
        .map(|mark| (mark.color, mark.kind, mark.x, mark.y))
        .collect();
    assert_eq!(
        named,
        vec![
            ("white", "dot", 1, 2),
            ("black", "hline", 3, 4),
            ("white", "vline", 5, 6),
        ]
    );
}

#[test]
fn unknown_codes_are_rejected_at_their_field() {
    let err = parse_err("paint:\n(g,.,1,2)\n");
    assert_eq!(err.position(), Some((2, 2)));
    assert!(err.to_string().contains("unknown color code 'g'"));

    let err = parse_err("paint:\n(w,+,1,2)\n");
    assert_eq!(err.position(), Some((2, 4)));
    assert!(err.to_string().contains("unknown stroke code '+'"));
}

#[test]
fn paint_marks_need_exactly_four_parenthesized_fields() {
    for bad in ["w,.,1,2", "(w,.,1)", "(w,.,1,2,3)", "(w,.,1,2"] {
        let source = format!("paint:\n{bad}\n");
        let err = parse_err(&source);
        assert_eq!(err.position(), Some((2, 1)), "input: {bad}");
        assert_eq!(
            err.expectation().as_deref(),
            Some(format!("expected a paint mark '(color,stroke,x,y)', found '{bad}'").as_str()),
            "input: {bad}"
        );
    }
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn coordinates_are_bare_decimal_digits() {
    for bad in ["+1", "-1", " 1", "1 ", "0x1", "one", ""] {
        let source = format!("extra:\ntree@{bad},2\n");
        let err = parse_err(&source);
        assert!(err.is_syntax(), "input: {bad}");
        assert!(err.to_string().contains("invalid coordinate"), "input: {bad}");
    }
}

#[test]
fn oversized_coordinates_are_out_of_range() {
    let err = parse_err("extra:\ntree@99999999999,2\n");
    assert_eq!(err.position(), Some((2, 6)));
    assert!(err.to_string().contains("coordinate '99999999999' is out of range"));
}
