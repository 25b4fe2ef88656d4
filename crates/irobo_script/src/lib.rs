//! Lexer, grammar, and AST for the irobo scripting language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of script source, with words resolved through a
//!   [`Lexicon`](irobo_translations::Lexicon)
//! - [`Parser`] - Recursive descent parsing of tokens into a [`Script`]
//! - [`parse`] / [`parse_with_locale`] - One-shot parsing entry points
//!
//! All positions are 1-based line/column pairs pointing at the first
//! character of the relevant token.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{
    CallExpression, ConditionalBranch, Expression, LiteralValue, Operator, OperatorKind, Script,
    Statement,
};
pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_with_locale};
pub use span::Span;
pub use token::{Token, TokenKind};
