//! Finalized proof event schema
//!
//! A ProofEvent is the exported, self-contained proof record. The digest
//! covers everything EXCEPT `event_proof.final_event_hash`, `verification`,
//! and `metadata` (the first is the digest itself, the latter two are
//! derivative/descriptive). It is immutable from finalize time on: no
//! snapshot may be added, removed, or edited once `final_event_hash` is
//! computed.

use crate::model::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use snapseal_core_types::{schema, ReportId, TraceToken};

/// One finalized report-level record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofEvent {
    /// Globally unique report identifier, assigned once at finalize time
    pub report_id: ReportId,

    /// Issuing party (descriptive metadata, embedded in the digest)
    pub issuer: String,

    /// Requesting party (descriptive metadata, embedded in the digest)
    pub applicant: String,

    /// RFC3339 UTC instant of finalization
    pub issued_at: String,

    /// The digested payload: trace token, snapshot sequence, and the hash
    pub event_proof: EventProof,

    /// How to re-check the record; never part of the digest input
    pub verification: VerificationInfo,

    /// Document type/format tags; never part of the digest input
    pub metadata: DocumentMetadata,
}

/// Trace token, ordered snapshots, and the event-level digest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventProof {
    /// Trace token shared with every contained snapshot
    pub trace_token: TraceToken,

    /// Hex SHA-256 over the canonical pre-image (the record minus this
    /// field, `verification`, and `metadata`)
    pub final_event_hash: String,

    /// Snapshots ordered by `version_index` ascending, frozen at finalize
    pub snapshots: Vec<Snapshot>,
}

/// Descriptive record of the verification method and locator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationInfo {
    /// Human-readable description of the digest rule
    pub method: String,

    /// Name of the field the locator re-checks
    pub validation_target: String,

    /// Verification locator parameterized by the final event hash
    pub verify_url: String,
}

/// Document type and format version tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub document_type: String,
    pub format_version: String,
}

impl DocumentMetadata {
    /// The current document tags
    pub fn current() -> Self {
        Self {
            document_type: schema::RECORD_DOCUMENT_TYPE.to_string(),
            format_version: schema::RECORD_FORMAT_VERSION.to_string(),
        }
    }
}

impl ProofEvent {
    /// Number of sealed versions contained in this record
    pub fn version_count(&self) -> usize {
        self.event_proof.snapshots.len()
    }
}
