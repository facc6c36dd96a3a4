//! Commit orchestration: persist a finalized event
//!
//! Writes every snapshot's image payload to the blob store and the record
//! itself to the export directory, in that order. The record is the
//! evidence master copy; blobs are the viewable payloads it references.

use snapseal_core::{log_op_end, log_op_error, log_op_start};
use snapseal_core::ProofEvent;
use snapseal_store::errors::Result;
use snapseal_store::{export, BlobStore};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a successfully committed proof event
#[derive(Debug, Clone, serde::Serialize)]
pub struct CommitReceipt {
    /// Path of the exported record file
    pub record_path: PathBuf,
    /// Blob-store keys of the persisted image payloads, in version order
    pub blob_keys: Vec<String>,
    /// The record's final event hash, echoed for callers
    pub final_event_hash: String,
}

/// Persist a finalized proof event's payloads and record
///
/// # Errors
///
/// Store-layer failures (IO, CAS collision) or a `Core` failure if a
/// snapshot's embedded payload cannot be decoded.
pub fn commit_event(
    event: &ProofEvent,
    blobs: &BlobStore,
    export_dir: &Path,
) -> Result<CommitReceipt> {
    let start = Instant::now();
    log_op_start!("commit_event", report_id = event.report_id.as_str());

    let outcome = commit_inner(event, blobs, export_dir);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(receipt) => {
            log_op_end!(
                "commit_event",
                duration_ms = duration_ms,
                blob_count = receipt.blob_keys.len()
            );
        }
        Err(e) => {
            log_op_error!("commit_event", e, duration_ms = duration_ms);
        }
    }
    outcome
}

fn commit_inner(
    event: &ProofEvent,
    blobs: &BlobStore,
    export_dir: &Path,
) -> Result<CommitReceipt> {
    let mut blob_keys = Vec::with_capacity(event.event_proof.snapshots.len());
    for snapshot in &event.event_proof.snapshots {
        let bytes = snapshot.image_bytes()?;
        blob_keys.push(blobs.write(&bytes, "png")?);
    }

    let record_path = export::write_record(export_dir, event)?;

    Ok(CommitReceipt {
        record_path,
        blob_keys,
        final_event_hash: event.event_proof.final_event_hash.clone(),
    })
}
