//! Digest computation for snapshots and proof events.
//!
//! Provides deterministic SHA256 digest computation for sealed image
//! content, event pre-images, and snapshot sequences.
//!
//! ## Digest Types
//!
//! - **Content Digest**: Hash of the base64 text of the image bytes
//! - **Event Digest**: Hash of the canonical event pre-image (the record
//!   minus `final_event_hash`, `verification`, and `metadata`)
//! - **Sequence Digest**: Hash of the ordered snapshot sequence (the
//!   multi-version session variant)
//!
//! ## Determinism Guarantees
//!
//! - Same input → same digest (canonical JSON serialization)
//! - Different snapshot order → different digest (order-sensitive)
//! - The event digest never covers the hash field itself: the pre-image is
//!   derived by field subtraction, so re-deriving it from an exported
//!   record reproduces the digest exactly.

use crate::canonical::to_canonical_json;
use crate::errors::{ProofError, Result};
use crate::model::{ProofEvent, Snapshot};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute the content digest of image bytes.
///
/// The canonical representation is the base64 text encoding of the bytes
/// (standard alphabet, padded), hashed as UTF-8. The digest therefore
/// matches the `content_base64` field embedded in the surrounding record
/// byte-for-byte; hashing the raw bytes instead would silently diverge
/// from what the record carries.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
pub fn content_digest(image_bytes: &[u8]) -> String {
    let encoded =
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, image_bytes);
    content_digest_from_base64(&encoded)
}

/// Compute the content digest from an already-encoded base64 text.
///
/// Used by the verifier to re-check a snapshot against the base64 payload
/// embedded in the record, without decoding it first.
pub fn content_digest_from_base64(content_base64: &str) -> String {
    hash_string(content_base64)
}

/// Derive the pre-image of a proof event by field subtraction.
///
/// Removes `event_proof.final_event_hash`, `verification`, and `metadata`
/// from the serialized record. Everything else (report identity, issuer,
/// applicant, issued-at, trace token, and the full snapshot sequence) is
/// part of the digest input.
///
/// ## Errors
///
/// Returns `Serialization` if the event cannot be represented as JSON.
pub fn pre_image_value(event: &ProofEvent) -> Result<Value> {
    let mut value = serde_json::to_value(event)?;

    if let Value::Object(ref mut top) = value {
        top.remove("verification");
        top.remove("metadata");
        if let Some(Value::Object(proof)) = top.get_mut("event_proof") {
            proof.remove("final_event_hash");
        }
    }

    Ok(value)
}

/// Compute the final event hash over the canonical pre-image.
///
/// The defining invariant: the digest covers the record minus the hash
/// field itself. The builder computes it once at finalize time; the
/// verifier recomputes it from the exported record and compares.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `Serialization` if canonical encoding fails.
pub fn compute_event_digest(event: &ProofEvent) -> Result<String> {
    let pre_image = pre_image_value(event)?;
    let canonical = to_canonical_json(&pre_image)?;
    Ok(hash_string(&canonical))
}

/// Compute the digest of an ordered snapshot sequence.
///
/// The multi-version session variant: the pre-image is exactly the ordered
/// sequence of sealed snapshots, with no applicant/issuer wrapper. Order
/// matters: different orderings produce different digests.
///
/// ## Errors
///
/// Returns `EmptySnapshotSet` for an empty sequence, `Serialization` if
/// canonical encoding fails.
pub fn sequence_digest(snapshots: &[Snapshot]) -> Result<String> {
    if snapshots.is_empty() {
        return Err(ProofError::EmptySnapshotSet);
    }
    let canonical = to_canonical_json(&snapshots)?;
    Ok(hash_string(&canonical))
}

/// Hash a string using SHA256.
///
/// Internal helper for deterministic digest computation.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
