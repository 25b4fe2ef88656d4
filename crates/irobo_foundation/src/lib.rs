//! Shared error and result types for irobo.
//!
//! This crate provides:
//! - [`Error`] - The single error type used across all layers
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - Alias for `std::result::Result<T, Error>`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorKind, Result};
