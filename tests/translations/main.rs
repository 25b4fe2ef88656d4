//! Integration tests for Layer 1: Translations
//!
//! Tests for locales, the canonical vocabulary, and lexicon resolution.
