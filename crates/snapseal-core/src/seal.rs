//! Snapshot Sealer
//!
//! Turns one generation's inputs and resulting image bytes into an
//! immutable, fully-populated snapshot record with a content digest.
//!
//! The bytes passed in must be final-form: the digest is computed here,
//! before anything downstream can re-encode or recompress the image. A
//! digest computed after a save→reopen cycle describes whatever bytes the
//! re-encoder happened to emit, not the bytes the record embeds.

use crate::errors::{ProofError, Result};
use crate::model::{GenerationParams, Snapshot};
use crate::proof::digest::content_digest_from_base64;
use snapseal_core_types::TraceToken;

/// Seal one generation event, stamping the current UTC time
///
/// # Errors
///
/// Returns `InvalidInput` when `image_bytes` is empty, `version_index` is
/// zero, or `params` fails validation.
pub fn seal(
    params: GenerationParams,
    image_bytes: &[u8],
    version_index: u32,
    trace_token: &TraceToken,
) -> Result<Snapshot> {
    let timestamp_utc = chrono::Utc::now().to_rfc3339();
    seal_at(params, image_bytes, version_index, trace_token, &timestamp_utc)
}

/// Seal with an explicit timestamp (deterministic construction, replay)
///
/// # Errors
///
/// Same failure modes as [`seal`].
pub fn seal_at(
    params: GenerationParams,
    image_bytes: &[u8],
    version_index: u32,
    trace_token: &TraceToken,
    timestamp_utc: &str,
) -> Result<Snapshot> {
    if image_bytes.is_empty() {
        return Err(ProofError::invalid_input(
            "image_bytes",
            "cannot seal an empty image",
        ));
    }
    if version_index == 0 {
        return Err(ProofError::invalid_input(
            "version_index",
            "version indices start at 1",
        ));
    }
    params.validate()?;

    // Encode once; the digest is over exactly this text, so the record's
    // embedded payload and its digest can never drift apart.
    let content_base64 =
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, image_bytes);
    let content_digest = content_digest_from_base64(&content_base64);

    Ok(Snapshot {
        version_index,
        trace_token: trace_token.clone(),
        timestamp_utc: timestamp_utc.to_string(),
        input_parameters: params,
        content_digest,
        content_base64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerationParams {
        GenerationParams {
            prompt: "a red fox".to_string(),
            seed: 42,
            model: "black-forest-labs/FLUX.1-schnell".to_string(),
            width: 512,
            height: 512,
            steps: 8,
        }
    }

    #[test]
    fn test_seal_stamps_timestamp() {
        let trace = TraceToken::from_string("T1");
        let snap = seal(params(), b"bytes", 1, &trace).unwrap();
        assert!(!snap.timestamp_utc.is_empty());
        assert_eq!(snap.version_index, 1);
        assert_eq!(snap.trace_token, trace);
    }

    #[test]
    fn test_seal_rejects_empty_bytes() {
        let trace = TraceToken::from_string("T1");
        let err = seal(params(), b"", 1, &trace).unwrap_err();
        assert!(matches!(err, ProofError::InvalidInput { ref field, .. } if field == "image_bytes"));
    }

    #[test]
    fn test_seal_rejects_version_zero() {
        let trace = TraceToken::from_string("T1");
        let err = seal(params(), b"bytes", 0, &trace).unwrap_err();
        assert!(
            matches!(err, ProofError::InvalidInput { ref field, .. } if field == "version_index")
        );
    }
}
