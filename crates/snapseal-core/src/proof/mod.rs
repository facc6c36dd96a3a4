//! Proof event construction: digest computation and the event builder

pub mod builder;
pub mod digest;

pub use builder::{finalize, finalize_at};
pub use digest::{compute_event_digest, content_digest, pre_image_value, sequence_digest};
