//! Sealed snapshot of one generation attempt
//!
//! A Snapshot is immutable once sealed: the timestamp is assigned at seal
//! time and never touched again, and the content digest is a pure function
//! of the image bytes in effect at seal time. It is never recomputed from a
//! re-saved or re-encoded copy of the image.

use crate::errors::{ProofError, Result};
use crate::model::params::GenerationParams;
use serde::{Deserialize, Serialize};
use snapseal_core_types::TraceToken;

/// One sealed generation event
///
/// Field order here is irrelevant to the digest: the canonical encoding
/// sorts keys lexicographically before hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Position within the trace; starts at 1, strictly ascending
    pub version_index: u32,

    /// Trace token shared by all snapshots of the session
    pub trace_token: TraceToken,

    /// RFC3339 UTC instant assigned at seal time
    pub timestamp_utc: String,

    /// The generation request, stored verbatim
    pub input_parameters: GenerationParams,

    /// Hex SHA-256 over the UTF-8 bytes of `content_base64`
    pub content_digest: String,

    /// Base64 (standard alphabet, padded) text of the image bytes
    pub content_base64: String,
}

impl Snapshot {
    /// Decode the embedded image bytes
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` when `content_base64` is not valid base64
    /// (possible only for records hydrated from external sources).
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        base64::Engine::decode(
            &base64::engine::general_purpose::STANDARD,
            &self.content_base64,
        )
        .map_err(|_| ProofError::MalformedRecord {
            field: "content_base64".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            version_index: 1,
            trace_token: TraceToken::from_string("T1"),
            timestamp_utc: "2026-01-02T03:04:05+00:00".to_string(),
            input_parameters: GenerationParams {
                prompt: "a red fox".to_string(),
                seed: 42,
                model: "m".to_string(),
                width: 512,
                height: 512,
                steps: 8,
            },
            content_digest: String::new(),
            content_base64: "aGVsbG8=".to_string(), // "hello"
        }
    }

    #[test]
    fn test_image_bytes_roundtrip() {
        let snap = sample_snapshot();
        assert_eq!(snap.image_bytes().unwrap(), b"hello");
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let mut snap = sample_snapshot();
        snap.content_base64 = "!!not base64!!".to_string();
        let err = snap.image_bytes().unwrap_err();
        assert!(matches!(err, ProofError::MalformedRecord { .. }));
    }
}
