//! SnapSeal Engine - Session orchestration
//!
//! Coordinates the core and the store across one generation session:
//! - `session`: single-owner, append-only snapshot accumulation with
//!   freeze-at-finalize discipline
//! - `commit`: persist a finalized event's image payloads and record
//!
//! Each session exclusively owns its snapshot sequence; concurrent
//! sessions never share mutable accumulation state, so single-writer
//! `&mut` discipline is the only synchronization needed.

pub mod commit;
pub mod session;

pub use commit::{commit_event, CommitReceipt};
pub use session::{FrozenSession, Session};
