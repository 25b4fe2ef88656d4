//! Locale tables, word roles, and the lexicon for irobo scripts.
//!
//! This crate provides:
//! - [`Locale`] - The supported keyword languages
//! - [`WordRole`] - The keyword / atom / builtin partition of the vocabulary
//! - [`Lexicon`] - Case-insensitive localized-word to canonical-word lookup
//! - [`tables`] - The static canonical vocabulary and per-locale spellings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod locale;
pub mod roles;
pub mod tables;

pub use lexicon::{CanonicalWord, Lexicon};
pub use locale::Locale;
pub use roles::WordRole;
