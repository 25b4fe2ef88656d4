//! Integration tests for Layer 2: Script
//!
//! Tests for the lexer, the statement grammar, and error reporting.

mod errors;
mod lexer;
mod statements;
