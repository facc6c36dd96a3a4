//! Verbatim proof-record export and import
//!
//! The exported artifact is the record itself, key-sorted and
//! pretty-printed for human inspection. Verification re-derives the
//! pre-image by field subtraction, so the stored whitespace does not
//! participate in the digest; what must never change are the semantic
//! field values, which this module writes and reads without
//! transformation.

use crate::cas::atomic::atomic_write;
use crate::errors::{io_error, Result, StoreError};
use snapseal_core::{ProofEvent, ReportId};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical file name for a proof record
pub fn record_file_name(report_id: &ReportId) -> String {
    format!("proof_event_{}.json", report_id)
}

/// Write a finalized proof event to the export directory
///
/// The record is serialized with sorted keys and written atomically.
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns `Serialization` if encoding fails, `Io` on filesystem failure.
pub fn write_record(dir: &Path, event: &ProofEvent) -> Result<PathBuf> {
    // Normalize through Value for sorted keys, then pretty-print.
    let normalized = serde_json::to_value(event)?;
    let text = serde_json::to_string_pretty(&normalized)?;

    let path = dir.join(record_file_name(&event.report_id));
    atomic_write(&path, text.as_bytes())?;
    Ok(path)
}

/// Read a proof record back from disk
///
/// Returns the raw text exactly as stored (the verifier's input) together
/// with the parsed event.
///
/// # Errors
///
/// Returns `RecordNotFound` if the file is absent, `Io` on read failure,
/// `Serialization` if the text is not a valid record.
pub fn read_record(path: &Path) -> Result<(String, ProofEvent)> {
    if !path.exists() {
        return Err(StoreError::RecordNotFound {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| io_error("read_record", e))?;
    let event: ProofEvent = serde_json::from_str(&text)?;
    Ok((text, event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_file_name() {
        let id = ReportId::from_string("r-123");
        assert_eq!(record_file_name(&id), "proof_event_r-123.json");
    }
}
