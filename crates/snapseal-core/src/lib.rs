//! SnapSeal Core - Proof-event construction and verification
//!
//! This crate provides the foundational data structures and operations for
//! SnapSeal, including:
//! - Snapshot and ProofEvent models for AI-image-generation evidence
//! - The Snapshot Sealer (content digest over the base64 text encoding)
//! - The Proof Event Builder (two-pass self-referential digest resolution)
//! - The Verifier (field-subtraction recompute, usable from record bytes alone)
//! - Canonical JSON encoding (sorted keys, compact, UTF-8)
//!
//! Sealing, finalizing, and verifying are pure functions of their inputs;
//! nothing here blocks on network or disk.

pub mod canonical;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod proof;
pub mod seal;
pub mod verify;

// Re-export commonly used types
pub use config::ProofConfig;
pub use errors::{ProofError, ProofErrorKind, Result};
pub use model::{DocumentMetadata, EventProof, GenerationParams, ProofEvent, Snapshot, VerificationInfo};
pub use proof::{compute_event_digest, content_digest, finalize, finalize_at, sequence_digest};
pub use seal::{seal, seal_at};
pub use snapseal_core_types::{ReportId, TraceToken};
pub use verify::{verify_event, verify_record, verify_sequence, InvalidReason, Verdict};
