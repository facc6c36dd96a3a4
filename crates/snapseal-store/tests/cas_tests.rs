// Integration tests for the blob store: sharded layout, idempotency, and
// missing-blob behavior

use snapseal_store::{BlobStore, StoreError};
use tempfile::TempDir;

#[test]
fn test_blob_lands_in_sharded_directory() {
    let dir = TempDir::new().unwrap();
    let store = BlobStore::new(dir.path());

    let key = store.write(b"sharded payload", "png").unwrap();
    let shard = &key[..2];
    let expected = dir.path().join(shard).join(format!("{}.png", key));

    assert!(expected.exists());
}

#[test]
fn test_write_is_idempotent_and_stable() {
    let dir = TempDir::new().unwrap();
    let store = BlobStore::new(dir.path());

    let key1 = store.write(b"same bytes", "png").unwrap();
    let key2 = store.write(b"same bytes", "png").unwrap();
    assert_eq!(key1, key2);

    let read_back = store.read(&key1).unwrap();
    assert_eq!(read_back, b"same bytes");
}

#[test]
fn test_different_content_different_keys() {
    let dir = TempDir::new().unwrap();
    let store = BlobStore::new(dir.path());

    let key_a = store.write(b"payload a", "png").unwrap();
    let key_b = store.write(b"payload b", "png").unwrap();
    assert_ne!(key_a, key_b);
}

#[test]
fn test_missing_blob_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = BlobStore::new(dir.path());

    let err = store.read(&"ab".repeat(32)).unwrap_err();
    assert!(matches!(err, StoreError::CasMissing { .. }));
}
