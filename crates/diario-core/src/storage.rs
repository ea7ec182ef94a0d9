//! Durable key-value storage abstraction.
//!
//! The session survives restarts by writing a small JSON document under a
//! fixed key. Backends are trait-based so the on-disk store can be swapped
//! for an in-memory one in tests or embedded hosts.
//!
//! # Example
//!
//! ```ignore
//! use diario_core::storage::{FileKeyValueStore, KeyValueStore};
//! use std::path::PathBuf;
//!
//! let store = FileKeyValueStore::new(PathBuf::from("./storage/session"));
//!
//! store.set("@authTokens", "{}").await?;
//! assert_eq!(store.get("@authTokens").await?, Some("{}".to_string()));
//! store.remove("@authTokens").await?;
//! ```

use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs;

/// Boxed future returned by [`KeyValueStore`] operations.
pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StorageError>> + Send + 'a>>;

/// Abstract trait for durable key-value backends.
///
/// Values are opaque strings; callers serialize before writing.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove<'a>(&'a self, key: &'a str) -> StorageFuture<'a, ()>;
}

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.contains("..") {
        return Err(StorageError::InvalidKey(
            "Key must not be empty or contain '..'".to_string(),
        ));
    }

    if !key
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'))
    {
        return Err(StorageError::InvalidKey(
            "Key contains invalid characters".to_string(),
        ));
    }

    Ok(())
}

/// Filesystem-backed store. Each key is a single file in `base_dir`.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>> {
        Box::pin(async move {
            let path = self.path_for(key)?;

            match fs::read_to_string(&path).await {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            let path = self.path_for(key)?;
            fs::create_dir_all(&self.base_dir).await?;

            // Write then rename so a crash never leaves a half-written value.
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, value).await?;
            fs::rename(&tmp, &path).await?;

            tracing::debug!(storage.key = %key, "Value persisted");
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            let path = self.path_for(key)?;

            match fs::remove_file(&path).await {
                Ok(_) => {
                    tracing::debug!(storage.key = %key, "Value removed");
                    Ok(())
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
    }
}

/// Process-local store. Counts mutations so callers can assert on side effects.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    removals: AtomicUsize,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.lock().contains_key(key)
    }

    /// Number of `set` calls served.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `remove` calls served.
    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StorageFuture<'a, Option<String>> {
        Box::pin(async move {
            validate_key(key)?;
            Ok(self.values.lock().get(key).cloned())
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            validate_key(key)?;
            self.values.lock().insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            validate_key(key)?;
            self.values.lock().remove(key);
            self.removals.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}
