//! Identity types for proof records and trace correlation
//!
//! A ReportId names one finalized proof record; a TraceToken groups all
//! snapshots sealed within one generation session. Both are opaque strings
//! backed by random UUIDs and are immutable once assigned.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique identifier for one finalized proof record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(String);

impl ReportId {
    /// Generate a new random ReportId using UUIDv4
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization and tests)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque correlator grouping snapshots into one session/report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceToken(String);

impl TraceToken {
    /// Generate a new random TraceToken using UUIDv4
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization and tests)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Default for TraceToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
