//! SnapSeal Store - Persistence and export collaborator
//!
//! Receives finalized proof events and their image payloads from the core
//! and persists them:
//! - `cas`: content-addressed blob storage for image bytes (atomic writes,
//!   sharded directories, collision detection)
//! - `export`: verbatim proof-record export and import
//!
//! The store never transforms a record's semantic fields; the verifier's
//! round-trip depends on reading back exactly what was finalized.

pub mod cas;
pub mod errors;
pub mod export;

pub use cas::BlobStore;
pub use errors::{Result, StoreError, StoreErrorKind};
