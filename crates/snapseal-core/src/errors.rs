//! Error facility for the proof core
//!
//! One taxonomy covers the whole lifecycle: seal-time input validation,
//! finalize-time precondition violations, and record-shape failures seen
//! when re-hydrating an exported record. Verification outcomes are NOT
//! errors: a tampered record is a [`crate::verify::Verdict::Invalid`], not
//! an `Err`. Each variant maps to a stable `ERR_*` code usable by callers
//! (CLI exit paths, log fields) without string-matching messages.

use thiserror::Error;

/// Result type alias using ProofError
pub type Result<T> = std::result::Result<T, ProofError>;

/// Canonical error kind taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofErrorKind {
    // Seal-time
    InvalidInput,

    // Finalize-time
    EmptySnapshotSet,
    InconsistentTrace,
    SessionFinalized,

    // Record hydration
    MalformedRecord,

    // Integration
    Serialization,
}

impl ProofErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ProofErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ProofErrorKind::EmptySnapshotSet => "ERR_EMPTY_SNAPSHOT_SET",
            ProofErrorKind::InconsistentTrace => "ERR_INCONSISTENT_TRACE",
            ProofErrorKind::SessionFinalized => "ERR_SESSION_FINALIZED",
            ProofErrorKind::MalformedRecord => "ERR_MALFORMED_RECORD",
            ProofErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Error taxonomy for seal, finalize, and record-hydration operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProofError {
    /// A required seal/finalize input is missing or out of range
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Finalize was requested with no sealed snapshots
    #[error("Cannot finalize: no snapshots were sealed for this trace")]
    EmptySnapshotSet,

    /// A snapshot carries a trace token that disagrees with the session's
    #[error(
        "Inconsistent trace token at version {version_index}: expected {expected}, found {found}"
    )]
    InconsistentTrace {
        expected: String,
        found: String,
        version_index: u32,
    },

    /// The session was already finalized; the snapshot sequence is frozen
    #[error("Session {trace_token} is finalized and no longer accepts snapshots")]
    SessionFinalized { trace_token: String },

    /// An exported record is missing a required field or is not valid JSON
    #[error("Malformed proof record: missing or invalid field '{field}'")]
    MalformedRecord { field: String },

    /// JSON encoding/decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ProofError {
    /// Get the error kind
    pub fn kind(&self) -> ProofErrorKind {
        match self {
            ProofError::InvalidInput { .. } => ProofErrorKind::InvalidInput,
            ProofError::EmptySnapshotSet => ProofErrorKind::EmptySnapshotSet,
            ProofError::InconsistentTrace { .. } => ProofErrorKind::InconsistentTrace,
            ProofError::SessionFinalized { .. } => ProofErrorKind::SessionFinalized,
            ProofError::MalformedRecord { .. } => ProofErrorKind::MalformedRecord,
            ProofError::Serialization { .. } => ProofErrorKind::Serialization,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Shorthand for an `InvalidInput` on a named field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProofError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Conversion from serde_json::Error to ProofError
impl From<serde_json::Error> for ProofError {
    fn from(err: serde_json::Error) -> Self {
        ProofError::Serialization {
            message: err.to_string(),
        }
    }
}
