//! JSON rendering of parsed scripts and maps.
//!
//! The serialized shape is a public contract: every node carries a `"type"`
//! tag, call expressions always include `nativeName` (as `null` when the
//! word did not resolve), and maps come out as
//! `{"type":"map","map":[...],"extra":[...],"paint":[...]}`. Downstream
//! robot tooling matches on these tags.

use irobo_foundation::{Error, Result};
use serde::Serialize;

/// Renders a parsed tree as compact JSON.
///
/// # Errors
/// Returns a serialization error if the value cannot be rendered.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::serialize(e.to_string()))
}

/// Renders a parsed tree as pretty-printed JSON.
///
/// # Errors
/// Returns a serialization error if the value cannot be rendered.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::serialize(e.to_string()))
}
