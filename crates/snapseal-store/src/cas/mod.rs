//! Content-addressed storage for image payloads

pub mod atomic;
pub mod blob_store;
pub mod sharding;

pub use blob_store::BlobStore;
