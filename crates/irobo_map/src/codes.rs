//! Code tables for the paint section.
//!
//! Paint records spell colors and strokes as short codes; the canonical
//! names below are what downstream tooling expects in serialized maps.

use irobo_foundation::{Error, Result};

/// Resolves a color code to its canonical name.
///
/// # Errors
/// Returns a syntax error at the given position for an unknown code.
pub fn color(code: &str, line: u32, column: u32) -> Result<&'static str> {
    match code {
        "w" => Ok("white"),
        "b" => Ok("black"),
        other => Err(Error::syntax(
            &format!("unknown color code '{other}'"),
            line,
            column,
        )),
    }
}

/// Resolves a stroke code to its canonical name.
///
/// # Errors
/// Returns a syntax error at the given position for an unknown code.
pub fn stroke(code: &str, line: u32, column: u32) -> Result<&'static str> {
    match code {
        "." => Ok("dot"),
        "-" => Ok("hline"),
        "|" => Ok("vline"),
        other => Err(Error::syntax(
            &format!("unknown stroke code '{other}'"),
            line,
            column,
        )),
    }
}
