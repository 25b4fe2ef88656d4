//! File loading, JSON output, and the interactive REPL for irobo.
//!
//! This crate provides:
//! - [`loader`] - Reading script and map files with their on-disk encodings
//! - [`to_json`] / [`to_json_pretty`] - JSON rendering of parsed trees
//! - [`Repl`] - An interactive parser explorer with completion and
//!   highlighting driven by the active locale's vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod json;
pub mod loader;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::IroboHighlighter;
pub use json::{to_json, to_json_pretty};
pub use loader::{Encoding, parse_map_file, parse_script_file, read_file};
pub use repl::Repl;
