//! Canonical schema constants for structured logging and exported records
//!
//! These constants ensure consistency across all logging, error reporting,
//! and exported proof records.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_REPORT_ID: &str = "report_id";
pub const FIELD_TRACE_TOKEN: &str = "trace_token";
pub const FIELD_VERSION_INDEX: &str = "version_index";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Exported-record constants
pub const RECORD_DOCUMENT_TYPE: &str = "AI_GENERATION_PROOF_EVENT";
pub const RECORD_FORMAT_VERSION: &str = "1.1";
pub const VERIFICATION_METHOD: &str = "SHA-256 over a sorted, compact JSON structure";
pub const VERIFICATION_TARGET: &str = "final_event_hash";
