//! Verifier
//!
//! Recomputes the final event hash of an exported record and compares it
//! against the embedded value. Stateless and side-effect-free: any party
//! holding only the record bytes can run it, with no access to the
//! original image bytes, the generation API, or process-local state.
//!
//! The pre-image is derived from the supplied record by field subtraction
//! (never by re-parsing some external source), so the round-trip holds for
//! any faithful copy of the record regardless of how it was pretty-printed
//! in storage.

use crate::model::{ProofEvent, Snapshot};
use crate::proof::digest::{compute_event_digest, content_digest_from_base64, sequence_digest};
use serde_json::Value;

/// Verification outcome: a binary signal plus the specific mismatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The record's digests are internally consistent
    Valid,
    /// The record failed verification; the reason names the field
    Invalid(InvalidReason),
}

/// Why a record failed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// A recomputed digest disagrees with the embedded one
    HashMismatch {
        field: String,
        expected: String,
        computed: String,
    },
    /// A required field is absent or structurally invalid
    MalformedRecord { field: String },
}

impl Verdict {
    /// Whether verification succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    fn malformed(field: impl Into<String>) -> Self {
        Verdict::Invalid(InvalidReason::MalformedRecord {
            field: field.into(),
        })
    }

    fn hash_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        computed: impl Into<String>,
    ) -> Self {
        Verdict::Invalid(InvalidReason::HashMismatch {
            field: field.into(),
            expected: expected.into(),
            computed: computed.into(),
        })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::HashMismatch {
                field,
                expected,
                computed,
            } => write!(
                f,
                "hash mismatch on '{}': record claims {}, recomputed {}",
                field, expected, computed
            ),
            InvalidReason::MalformedRecord { field } => {
                write!(f, "malformed record: missing or invalid field '{}'", field)
            }
        }
    }
}

fn is_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Verify a parsed proof event
///
/// Checks, in order: record shape, per-snapshot trace agreement,
/// per-snapshot content digests against the embedded base64 payloads, and
/// finally the event digest against the recomputed pre-image hash.
pub fn verify_event(event: &ProofEvent) -> Verdict {
    if event.report_id.as_str().is_empty() {
        return Verdict::malformed("report_id");
    }
    if event.event_proof.snapshots.is_empty() {
        return Verdict::malformed("event_proof.snapshots");
    }
    let claimed = &event.event_proof.final_event_hash;
    if !is_hex_digest(claimed) {
        return Verdict::malformed("event_proof.final_event_hash");
    }

    for (index, snapshot) in event.event_proof.snapshots.iter().enumerate() {
        if snapshot.trace_token != event.event_proof.trace_token {
            return Verdict::malformed(format!("event_proof.snapshots[{}].trace_token", index));
        }
        let recomputed = content_digest_from_base64(&snapshot.content_base64);
        if recomputed != snapshot.content_digest {
            return Verdict::hash_mismatch(
                format!("event_proof.snapshots[{}].content_digest", index),
                snapshot.content_digest.clone(),
                recomputed,
            );
        }
    }

    let computed = match compute_event_digest(event) {
        Ok(digest) => digest,
        Err(_) => return Verdict::malformed("event_proof"),
    };
    if computed != *claimed {
        return Verdict::hash_mismatch("event_proof.final_event_hash", claimed.clone(), computed);
    }

    Verdict::Valid
}

/// Required top-level paths of an exported record
const REQUIRED_PATHS: &[&str] = &[
    "report_id",
    "issuer",
    "applicant",
    "issued_at",
    "event_proof",
];
const REQUIRED_PROOF_PATHS: &[&str] = &["trace_token", "final_event_hash", "snapshots"];

/// Verify an exported record from its raw JSON text
///
/// Unparseable input and missing required fields are reported as
/// `Invalid(MalformedRecord)` naming the first offending field; this
/// function never fails, it only judges.
pub fn verify_record(record_text: &str) -> Verdict {
    let value: Value = match serde_json::from_str(record_text) {
        Ok(value) => value,
        Err(_) => return Verdict::malformed("<json>"),
    };

    let Some(top) = value.as_object() else {
        return Verdict::malformed("<root>");
    };
    for path in REQUIRED_PATHS {
        if !top.contains_key(*path) {
            return Verdict::malformed(*path);
        }
    }
    if let Some(proof) = value.get("event_proof").and_then(Value::as_object) {
        for path in REQUIRED_PROOF_PATHS {
            if !proof.contains_key(*path) {
                return Verdict::malformed(format!("event_proof.{}", path));
            }
        }
    } else {
        return Verdict::malformed("event_proof");
    }

    let event: ProofEvent = match serde_json::from_value(value) {
        Ok(event) => event,
        Err(_) => return Verdict::malformed("<record>"),
    };
    verify_event(&event)
}

/// Verify a frozen snapshot sequence against its sequence digest
///
/// The multi-version session variant of [`verify_event`]: the pre-image is
/// the ordered snapshot sequence itself.
pub fn verify_sequence(snapshots: &[Snapshot], expected_digest: &str) -> Verdict {
    if snapshots.is_empty() {
        return Verdict::malformed("snapshots");
    }
    if !is_hex_digest(expected_digest) {
        return Verdict::malformed("sequence_digest");
    }

    for (index, snapshot) in snapshots.iter().enumerate() {
        let recomputed = content_digest_from_base64(&snapshot.content_base64);
        if recomputed != snapshot.content_digest {
            return Verdict::hash_mismatch(
                format!("snapshots[{}].content_digest", index),
                snapshot.content_digest.clone(),
                recomputed,
            );
        }
    }

    match sequence_digest(snapshots) {
        Ok(computed) if computed == expected_digest => Verdict::Valid,
        Ok(computed) => Verdict::hash_mismatch("sequence_digest", expected_digest, computed),
        Err(_) => Verdict::malformed("snapshots"),
    }
}
