//! Cross-layer integration tests for irobo
//!
//! Tests that verify correct interaction between multiple crates.

mod locale_parity;
