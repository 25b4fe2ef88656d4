//! The keyword / atom / builtin partition of the canonical vocabulary.

/// Canonical names with control-flow meaning.
///
/// `procedure`, `repeat`, `repeatWhile`, `if`, and `else` open their own
/// statement forms; `return`, `end`, and `break` parse as ordinary calls.
pub const KEYWORDS: &[&str] = &[
    "procedure",
    "repeat",
    "repeatWhile",
    "if",
    "else",
    "return",
    "end",
    "break",
];

/// Canonical names for the boolean literals.
pub const ATOMS: &[&str] = &["true", "false"];

/// The grammatical role of a canonical word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WordRole {
    /// Control-flow keyword.
    Keyword,
    /// Boolean literal.
    Atom,
    /// Robot command or sensor.
    Builtin,
}

/// Classifies a canonical name.
///
/// Every canonical name that is neither a keyword nor an atom is a builtin.
#[must_use]
pub fn role_of(canonical: &str) -> WordRole {
    if KEYWORDS.contains(&canonical) {
        WordRole::Keyword
    } else if ATOMS.contains(&canonical) {
        WordRole::Atom
    } else {
        WordRole::Builtin
    }
}
