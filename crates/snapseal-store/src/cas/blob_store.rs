//! Filesystem-based content-addressed blob storage
//!
//! Holds the image payloads referenced by proof records. Keys are the hex
//! SHA-256 of the raw bytes, a storage concern only; the snapshot's
//! `content_digest` is computed separately, over the base64 text the
//! record embeds.

use crate::cas::atomic::atomic_write;
use crate::cas::sharding::shard_path;
use crate::errors::{cas_collision, cas_missing, io_error, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Filesystem-backed blob store
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Create a new blob store at the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write content and return its storage key
    ///
    /// - Computes the SHA256 key
    /// - Writes atomically using temp→rename
    /// - Idempotent: writing same content twice succeeds
    /// - Detects collisions: different content with the same key fails
    pub fn write(&self, content: &[u8], extension: &str) -> Result<String> {
        let key = self.compute_key(content);
        let target_path = shard_path(&self.root, &key, extension);

        if target_path.exists() {
            // Verify content matches (idempotency + collision detection)
            let existing = fs::read(&target_path).map_err(|e| io_error("read_blob", e))?;
            if existing == content {
                return Ok(key);
            }
            return Err(cas_collision(&key));
        }

        atomic_write(&target_path, content)?;
        Ok(key)
    }

    /// Read content by storage key
    ///
    /// Returns `CasMissing` if no blob is stored under the key.
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        // Try the extensions this store actually writes
        let extensions = ["png", "json", "bin"];

        for ext in &extensions {
            let path = shard_path(&self.root, key, ext);
            if path.exists() {
                return fs::read(&path).map_err(|e| io_error("read_blob", e));
            }
        }

        Err(cas_missing(key))
    }

    /// Compute the SHA256 storage key of content
    fn compute_key(&self, content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }
}
