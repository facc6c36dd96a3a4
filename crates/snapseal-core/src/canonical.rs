//! Canonical JSON encoding
//!
//! The digest pipeline depends on a byte-for-byte reproducible encoding:
//! object keys sorted lexicographically, compact separators, UTF-8 output
//! with non-ASCII characters preserved literally. Any independent
//! implementation following the same rule reproduces the exact byte
//! sequence (reference equivalent: Python
//! `json.dumps(v, sort_keys=True, separators=(",", ":"), ensure_ascii=False)`).
//!
//! Key sorting comes from `serde_json::Value`: with default features its
//! object representation is a BTreeMap, so serializing any value through
//! `Value` yields lexicographic key order regardless of struct field order.
//! The `preserve_order` feature must never be enabled in this workspace.

use crate::errors::Result;
use serde::Serialize;

/// Encode a value as canonical JSON
///
/// # Errors
///
/// Returns `Serialization` if the value cannot be represented as JSON.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String> {
    // Normalize through Value to get sorted keys, then compact-print.
    let normalized = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&normalized)?)
}
