//! Grammar and AST for irobo world maps.
//!
//! A map file holds up to three sections, introduced by fixed headers and
//! required to appear in this order when present:
//!
//! ```text
//! map:
//! AA
//!  B
//! extra:
//! tree@0,0
//! paint:
//! (w,.,4,1)
//! ```
//!
//! `map:` rows are kept verbatim (leading spaces included), `extra:` places
//! named entities at zero-based grid coordinates, and `paint:` records
//! painted cells through the single-character code tables in [`codes`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod codes;
pub mod parser;


pub use ast::{MapAst, PaintMark, Placement};
pub use parser::{Parser, parse};
