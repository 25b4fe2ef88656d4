//! Integration tests for the statement grammar.
//!
//! Tests realistic programs end to end through the public parsing API.

use irobo_script::{
    Expression, LiteralValue, OperatorKind, Script, Statement, parse, parse_with_locale,
};
use irobo_translations::Locale;

fn parse_en(source: &str) -> Script {
    parse(source).unwrap()
}

// =============================================================================
// Whole programs
// =============================================================================

#[test]
fn patrol_program_parses() {
    let script = parse_en(
        "# patrol until blocked\n\
         procedure patrol(times) {\n\
             repeat(times) {\n\
                 repeatWhile(frontIsClear) { forward }\n\
                 right\n\
             }\n\
         }\n\
         patrol(4)\n",
    );

    assert_eq!(script.len(), 2);
    let Statement::Procedure { name, arguments, body } = &script.body[0] else {
        panic!("expected a procedure, got {:?}", script.body[0]);
    };
    assert_eq!(name, "patrol");
    assert_eq!(arguments, &["times"]);
    assert!(matches!(body[0], Statement::CountLoop { .. }));
    assert!(matches!(script.body[1], Statement::Call { .. }));
}

#[test]
fn painting_program_mixes_statement_forms() {
    let script = parse_en(
        "paintWhite\n\
         steps = 0\n\
         repeat {\n\
             if (frontIsObstacle) { break }\n\
             forward\n\
             steps = steps + 1\n\
         }\n\
         stopPainting\n",
    );

    assert_eq!(script.len(), 4);
    assert!(matches!(script.body[0], Statement::Call { .. }));
    assert!(matches!(script.body[1], Statement::Assignment { .. }));
    assert!(matches!(script.body[2], Statement::InfiniteLoop { .. }));
    assert!(matches!(script.body[3], Statement::Call { .. }));
}

// =============================================================================
// Conditionals
// =============================================================================

#[test]
fn conditional_chains_flatten_into_branches() {
    let script = parse_en(
        "if (frontIsWhite) {\n\
             paintBlack\n\
         } else if (frontIsBlack) {\n\
             paintWhite\n\
         } else {\n\
             nop\n\
         }\n",
    );

    let Statement::Conditional { tests, otherwise } = &script.body[0] else {
        panic!("expected a conditional, got {:?}", script.body[0]);
    };
    assert_eq!(tests.len(), 2);
    assert_eq!(otherwise.len(), 1);
}

#[test]
fn conditional_without_else_has_empty_otherwise() {
    let script = parse_en("if (flipCoin) { left }");
    let Statement::Conditional { tests, otherwise } = &script.body[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(tests.len(), 1);
    assert!(otherwise.is_empty());
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn precedence_rises_from_or_to_unary() {
    // or < and < + < not, so this groups as ((1 + 2) and (not 3)) or 4.
    let script = parse_en("a = 1 + 2 and not 3 or 4");
    let Statement::Assignment { value, .. } = &script.body[0] else {
        panic!("expected an assignment");
    };

    let Expression::Binary { operator, left, .. } = value else {
        panic!("expected a binary expression, got {value:?}");
    };
    assert_eq!(operator.kind, OperatorKind::Or);

    let Expression::Binary { operator, .. } = left.as_ref() else {
        panic!("expected a binary expression, got {left:?}");
    };
    assert_eq!(operator.kind, OperatorKind::And);
}

#[test]
fn atoms_parse_as_resolved_calls() {
    let script = parse_with_locale("vlag = waar", Locale::Nl).unwrap();
    let Statement::Assignment { name, value } = &script.body[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(name, "vlag");

    let Expression::Call(call) = value else {
        panic!("expected a call, got {value:?}");
    };
    assert_eq!(call.name, "waar");
    assert_eq!(call.native_name.as_deref(), Some("true"));
    assert!(call.arguments.is_empty());
}

#[test]
fn literals_keep_their_numeric_kind() {
    let script = parse_en("a = 3\nb = 2.5");
    let values: Vec<&Expression> = script
        .body
        .iter()
        .map(|s| match s {
            Statement::Assignment { value, .. } => value,
            other => panic!("expected an assignment, got {other:?}"),
        })
        .collect();
    assert!(matches!(
        values[0],
        Expression::Literal {
            value: LiteralValue::Int(3)
        }
    ));
    assert!(matches!(
        values[1],
        Expression::Literal {
            value: LiteralValue::Float(f)
        } if (f - 2.5).abs() < f64::EPSILON
    ));
}

#[test]
fn call_arguments_nest() {
    let script = parse_en("go(steps(2), not flipCoin)");
    let Statement::Call { expr } = &script.body[0] else {
        panic!("expected a call");
    };
    assert_eq!(expr.arguments.len(), 2);
    assert!(matches!(&expr.arguments[0], Expression::Call(inner) if inner.name == "steps"));
    assert!(matches!(&expr.arguments[1], Expression::Unary { .. }));
}

#[test]
fn return_parses_as_a_call() {
    let script = parse_en("procedure double(n) { return(n + n) }");
    let Statement::Procedure { body, .. } = &script.body[0] else {
        panic!("expected a procedure");
    };
    let Statement::Call { expr } = &body[0] else {
        panic!("expected a call, got {:?}", body[0]);
    };
    assert_eq!(expr.native_name.as_deref(), Some("return"));
    assert_eq!(expr.arguments.len(), 1);
}
