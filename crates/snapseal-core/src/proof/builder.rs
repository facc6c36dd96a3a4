//! Proof event builder
//!
//! Folds a sealed snapshot sequence into a finalized, verifiable record.
//!
//! ## Self-reference resolution
//!
//! `final_event_hash` must certify the very record that contains it, which
//! is circular. Resolution is a strict two-pass construction:
//!
//! 1. Assemble the event with a blank hash and placeholder locator.
//! 2. Derive the pre-image by field subtraction (drop the hash field, the
//!    verification block, and the metadata block), canonically encode it,
//!    and hash.
//! 3. Write the hash and the locator derived from it into the record.
//!
//! The final record is never re-hashed; the digest only ever covers the
//! pre-image. Re-deriving the pre-image from the exported record and
//! re-running steps 2–3 reproduces `final_event_hash` exactly.

use crate::config::ProofConfig;
use crate::errors::{ProofError, Result};
use crate::model::{DocumentMetadata, EventProof, ProofEvent, Snapshot, VerificationInfo};
use crate::proof::digest::compute_event_digest;
use snapseal_core_types::{schema, ReportId, TraceToken};

/// Finalize a snapshot sequence into a proof event, stamping report id and
/// issue time
///
/// # Errors
///
/// - `EmptySnapshotSet` if no snapshots are provided
/// - `InconsistentTrace` if snapshot trace tokens disagree with `trace_token`
/// - `InvalidInput` on an empty applicant or a non-ascending version sequence
pub fn finalize(
    config: &ProofConfig,
    applicant: &str,
    trace_token: TraceToken,
    snapshots: Vec<Snapshot>,
) -> Result<ProofEvent> {
    let issued_at = chrono::Utc::now().to_rfc3339();
    finalize_at(
        config,
        applicant,
        trace_token,
        snapshots,
        ReportId::new(),
        &issued_at,
    )
}

/// Finalize with an explicit report id and issue time (deterministic
/// construction, replay)
///
/// # Errors
///
/// Same failure modes as [`finalize`].
pub fn finalize_at(
    config: &ProofConfig,
    applicant: &str,
    trace_token: TraceToken,
    snapshots: Vec<Snapshot>,
    report_id: ReportId,
    issued_at: &str,
) -> Result<ProofEvent> {
    if applicant.trim().is_empty() {
        return Err(ProofError::invalid_input(
            "applicant",
            "applicant name is required",
        ));
    }
    if snapshots.is_empty() {
        return Err(ProofError::EmptySnapshotSet);
    }

    for snapshot in &snapshots {
        if snapshot.trace_token != trace_token {
            return Err(ProofError::InconsistentTrace {
                expected: trace_token.as_str().to_string(),
                found: snapshot.trace_token.as_str().to_string(),
                version_index: snapshot.version_index,
            });
        }
    }

    for pair in snapshots.windows(2) {
        if pair[1].version_index <= pair[0].version_index {
            return Err(ProofError::invalid_input(
                "version_index",
                format!(
                    "version indices must be strictly ascending, got {} after {}",
                    pair[1].version_index, pair[0].version_index
                ),
            ));
        }
    }

    // Pass 1: assemble with a blank hash and locator.
    let mut event = ProofEvent {
        report_id,
        issuer: config.issuer.clone(),
        applicant: applicant.to_string(),
        issued_at: issued_at.to_string(),
        event_proof: EventProof {
            trace_token,
            final_event_hash: String::new(),
            snapshots,
        },
        verification: VerificationInfo {
            method: schema::VERIFICATION_METHOD.to_string(),
            validation_target: schema::VERIFICATION_TARGET.to_string(),
            verify_url: String::new(),
        },
        metadata: DocumentMetadata::current(),
    };

    // Pass 2: subtract, canonicalize, hash. Pass 3: fill in the hash and
    // the locator derived from it. From here the record is frozen.
    let final_event_hash = compute_event_digest(&event)?;
    event.verification.verify_url = config.verify_url(&final_event_hash);
    event.event_proof.final_event_hash = final_event_hash;

    Ok(event)
}
