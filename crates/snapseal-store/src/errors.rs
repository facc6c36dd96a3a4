//! Error handling for snapseal-store
//!
//! Wraps the core ProofError and adds store-specific failures. Helper
//! constructors keep call sites terse.

use snapseal_core::ProofError;
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Kind taxonomy for store failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    CasCollision,
    CasMissing,
    RecordNotFound,
    Serialization,
    Core,
}

impl StoreErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorKind::Io => "ERR_IO",
            StoreErrorKind::CasCollision => "ERR_CAS_COLLISION",
            StoreErrorKind::CasMissing => "ERR_CAS_MISSING",
            StoreErrorKind::RecordNotFound => "ERR_RECORD_NOT_FOUND",
            StoreErrorKind::Serialization => "ERR_SERIALIZATION",
            StoreErrorKind::Core => "ERR_CORE",
        }
    }
}

/// Error taxonomy for persistence and export operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure during the named operation
    #[error("IO error during {op}: {message}")]
    Io { op: String, message: String },

    /// Different content hashed to an existing CAS key
    #[error("CAS collision for key {key}")]
    CasCollision { key: String },

    /// No blob stored under the given CAS key
    #[error("CAS blob not found for key {key}")]
    CasMissing { key: String },

    /// The requested record file does not exist
    #[error("Proof record not found: {path}")]
    RecordNotFound { path: String },

    /// JSON encoding/decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A core-layer failure surfaced through the store
    #[error(transparent)]
    Core(#[from] ProofError),
}

impl StoreError {
    /// Get the error kind
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io { .. } => StoreErrorKind::Io,
            StoreError::CasCollision { .. } => StoreErrorKind::CasCollision,
            StoreError::CasMissing { .. } => StoreErrorKind::CasMissing,
            StoreError::RecordNotFound { .. } => StoreErrorKind::RecordNotFound,
            StoreError::Serialization { .. } => StoreErrorKind::Serialization,
            StoreError::Core(_) => StoreErrorKind::Core,
        }
    }

    /// Get the stable error code (core errors keep their own code)
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Core(inner) => inner.code(),
            other => other.kind().code(),
        }
    }
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> StoreError {
    StoreError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a CAS collision error
pub fn cas_collision(key: &str) -> StoreError {
    StoreError::CasCollision {
        key: key.to_string(),
    }
}

/// Create a CAS missing blob error
pub fn cas_missing(key: &str) -> StoreError {
    StoreError::CasMissing {
        key: key.to_string(),
    }
}

/// Conversion from serde_json::Error to StoreError
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization {
            message: err.to_string(),
        }
    }
}
