//! Error types for the irobo system.
//!
//! Uses `thiserror` for ergonomic error definition. Every layer reports
//! failures through the same [`Error`] type so callers can match on
//! [`ErrorKind`] without caring which layer produced the error.

use thiserror::Error;

/// Alias for results produced anywhere in the irobo system.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for irobo operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a syntax error at the given 1-based position.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            expected: None,
            found: None,
        })
    }

    /// Creates a syntax error that records what was expected and what was
    /// actually found.
    #[must_use]
    pub fn syntax_expected(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        let expected = expected.into();
        let found = found.into();
        Self::new(ErrorKind::Syntax {
            message: format!("expected {expected}, found {found}"),
            line,
            column,
            expected: Some(expected),
            found: Some(found),
        })
    }

    /// Creates a configuration error (bad translation table, unknown locale).
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates a file I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a character decoding error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialize(message.into()))
    }

    /// Returns `true` if this is a syntax error.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns the 1-based source position for syntax errors.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        match &self.kind {
            ErrorKind::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// Returns an `expected X, found Y` summary when the error recorded one.
    #[must_use]
    pub fn expectation(&self) -> Option<String> {
        match &self.kind {
            ErrorKind::Syntax {
                expected: Some(expected),
                found: Some(found),
                ..
            } => Some(format!("expected {expected}, found {found}")),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Source text violated the grammar or an elementary semantic rule.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// What the grammar expected at this position, if known.
        expected: Option<String>,
        /// What was actually found at this position, if known.
        found: Option<String>,
    },

    /// Translation table or locale configuration was invalid.
    ///
    /// Detected before parsing begins; never reported as a syntax error.
    #[error("configuration error: {0}")]
    Config(String),

    /// File could not be read.
    #[error("io error: {0}")]
    Io(String),

    /// File bytes could not be decoded with the declared encoding.
    #[error("decode error: {0}")]
    Decode(String),

    /// Value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),
}
