//! Integration tests for Layer 2: Map
//!
//! Tests for the line-oriented map grammar.

mod records;
