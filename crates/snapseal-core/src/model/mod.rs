//! Data model for sealed snapshots and finalized proof events

pub mod event;
pub mod params;
pub mod snapshot;

pub use event::{DocumentMetadata, EventProof, ProofEvent, VerificationInfo};
pub use params::GenerationParams;
pub use snapshot::Snapshot;
