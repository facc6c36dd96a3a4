//! Core types shared across SnapSeal facilities
//!
//! This crate provides foundational types used by the proof core,
//! the store, and the logging facility:
//!
//! - **Identity types**: ReportId, TraceToken
//! - **Schema constants**: Canonical field keys, event names, and
//!   exported-record constants

pub mod identity;
pub mod schema;

pub use identity::{ReportId, TraceToken};
