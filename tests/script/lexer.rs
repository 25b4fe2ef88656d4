//! Integration tests for the lexer.
//!
//! Tests tokenization of script source through the public API.

use irobo_script::{Lexer, TokenKind};
use irobo_translations::{Lexicon, Locale};

fn kinds(locale: Locale, source: &str) -> Vec<TokenKind> {
    let lexicon = Lexicon::new(locale).unwrap();
    Lexer::new(source, &lexicon)
        .tokenize_all()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn word(kind: &TokenKind) -> (&str, Option<&'static str>) {
    match kind {
        TokenKind::Word { surface, canonical } => {
            (surface.as_str(), canonical.as_ref().map(|c| c.name))
        }
        other => panic!("expected a word, got {other:?}"),
    }
}

// =============================================================================
// Words and resolution
// =============================================================================

#[test]
fn words_resolve_through_the_lexicon() {
    let kinds = kinds(Locale::Nl, "vooruit plons");
    assert_eq!(word(&kinds[0]), ("vooruit", Some("forward")));
    assert_eq!(word(&kinds[1]), ("plons", None));
}

#[test]
fn surface_spelling_is_preserved() {
    let kinds = kinds(Locale::En, "FORWARD");
    assert_eq!(word(&kinds[0]), ("FORWARD", Some("forward")));
}

#[test]
fn operator_words_lex_as_operators_in_every_locale() {
    for locale in [Locale::En, Locale::Nl, Locale::Fy] {
        let kinds = kinds(locale, "and or not");
        assert_eq!(kinds[0], TokenKind::And, "{locale}");
        assert_eq!(kinds[1], TokenKind::Or, "{locale}");
        assert_eq!(kinds[2], TokenKind::Not, "{locale}");
    }
}

#[test]
fn operator_words_are_exact_spelling_only() {
    // Unlike vocabulary words, `And` is not the operator.
    let kinds = kinds(Locale::En, "And");
    assert_eq!(word(&kinds[0]), ("And", None));
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn integers_and_floats() {
    let kinds = kinds(Locale::En, "42 2.5");
    assert_eq!(kinds[0], TokenKind::Int(42));
    assert_eq!(kinds[1], TokenKind::Float(2.5));
}

#[test]
fn minus_never_folds_into_a_number() {
    let kinds = kinds(Locale::En, "-1");
    assert_eq!(kinds[0], TokenKind::Minus);
    assert_eq!(kinds[1], TokenKind::Int(1));
}

// =============================================================================
// Trivia and spans
// =============================================================================

#[test]
fn comments_lex_as_trivia() {
    let kinds = kinds(Locale::En, "forward # to the wall\nright");
    assert!(matches!(kinds[0], TokenKind::Word { .. }));
    assert_eq!(kinds[1], TokenKind::Comment);
    assert!(matches!(kinds[2], TokenKind::Word { .. }));
    assert!(kinds[1].is_trivia());
}

#[test]
fn spans_report_one_based_positions() {
    let lexicon = Lexicon::new(Locale::En).unwrap();
    let tokens = Lexer::new("forward\n  right", &lexicon).tokenize_all();
    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 3));
}

#[test]
fn token_text_round_trips_the_source() {
    let source = "herhaal(3)";
    let lexicon = Lexicon::new(Locale::Nl).unwrap();
    let tokens = Lexer::new(source, &lexicon).tokenize_all();
    assert_eq!(tokens[0].text(source), "herhaal");
    assert_eq!(tokens[1].text(source), "(");
    assert_eq!(tokens[2].text(source), "3");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unexpected_characters_become_error_tokens() {
    let kinds = kinds(Locale::En, "a = 2 * 3");
    assert!(
        kinds.iter().any(|k| matches!(k, TokenKind::Error(_))),
        "{kinds:?}"
    );
}
