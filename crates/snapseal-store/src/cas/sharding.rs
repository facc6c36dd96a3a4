//! Sharding logic for the blob store
//!
//! Shards blobs into subdirectories based on the first 2 hex characters
//! of the key to avoid filesystem performance issues with too many files
//! in a single directory.

use std::path::{Path, PathBuf};

/// Compute the shard path for a given key
///
/// For key "abc123...", returns "<root>/ab/abc123.<ext>"
pub fn shard_path(root: &Path, key: &str, extension: &str) -> PathBuf {
    // Get first 2 chars for shard directory
    let shard = &key[..2.min(key.len())];

    root.join(shard).join(format!("{}.{}", key, extension))
}
