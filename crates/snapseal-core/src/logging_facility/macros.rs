//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use snapseal_core::log_op_start;
/// log_op_start!("finalize_event");
/// log_op_start!("finalize_event", trace_token = "t123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use snapseal_core::log_op_end;
/// log_op_end!("finalize_event", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error must expose `kind()` and `code()` (ProofError and StoreError
/// both do).
///
/// # Example
///
/// ```
/// # use snapseal_core::{log_op_error, errors::ProofError};
/// let err = ProofError::EmptySnapshotSet;
/// log_op_error!("finalize_event", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = snapseal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
            $($field)*
        );
    }};
}
