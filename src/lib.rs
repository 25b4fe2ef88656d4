//! irobo - Parser for a localized robot scripting language
//!
//! This crate re-exports all layers of the irobo system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: irobo_runtime      — File loading, JSON output, REPL, CLI
//! Layer 2: irobo_script       — Script lexer, grammar, and AST
//!          irobo_map          — Map grammar and AST
//! Layer 1: irobo_translations — Locales, word roles, and the lexicon
//! Layer 0: irobo_foundation   — Error and result types
//! ```

pub use irobo_foundation as foundation;
pub use irobo_map as map;
pub use irobo_runtime as runtime;
pub use irobo_script as script;
pub use irobo_translations as translations;
