//! Token types for irobo scripts.
//!
//! Tokens are the output of the lexer and input to the parser. Word tokens
//! are already resolved against the active lexicon, so the parser never
//! performs table lookups itself.

use irobo_translations::CanonicalWord;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for irobo scripts.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `=`
    Equals,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `|` (alternative spelling of `or`)
    Pipe,
    /// The word `and`
    And,
    /// The word `or`
    Or,
    /// The word `not`
    Not,

    // Literals
    /// Integer literal like `42`
    Int(i64),
    /// Float literal like `2.5`
    Float(f64),

    /// A word, with its lexicon resolution if any.
    ///
    /// `canonical` is `None` for plain identifiers (user variables and
    /// procedure names).
    Word {
        /// The surface spelling exactly as written.
        surface: String,
        /// The canonical entry this word resolved to, if any.
        canonical: Option<CanonicalWord>,
    },

    // Meta
    /// Comment from `#` to end of line
    Comment,
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment)
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Equals => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Pipe => "'|'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Not => "'not'",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Word { .. } => "word",
            Self::Comment => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
