// ABOUTME: Config Store seam — narrow async get/put interface over a durable key/value service
// ABOUTME: Provides the JSON-file-backed FileStore and an in-memory MemoryStore for tests
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Store key for the upstream search API key
pub const KEY_API_KEY: &str = "api_key";

/// Store key for the search-engine (cx) identifier
pub const KEY_CX_ID: &str = "cx_id";

/// Store key for the upstream base URL
pub const KEY_API_BASE_URL: &str = "api_base_url";

/// Placeholder shown on the admin panel when a key has never been written
pub const UNSET_PLACEHOLDER: &str = "Not Set";

/// Error raised by a failed store operation
///
/// The backing service is fallible I/O; failures carry the underlying
/// message so the handler boundary can surface it verbatim.
#[derive(Debug, Clone)]
pub struct StoreError {
    /// Human-readable description of the failure
    pub message: String,
}

impl StoreError {
    /// Create a store error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Narrow interface over the durable key/value service
///
/// Keys are flat strings with no namespacing. Each key is independently
/// last-write-wins; there is no transactional grouping across keys and no
/// retry inside this seam — the caller decides how to report failure.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read a key, `None` when it has never been written
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key, overwriting any previous value
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Durable store backed by a single JSON object file
///
/// Each `put` rewrites the whole file under an internal mutex; the mutex
/// exists for file integrity only and grants no cross-key atomicity to
/// callers issuing separate `put`s.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store persisting to the given file path
    ///
    /// The file is created lazily on first `put`; a missing file reads as
    /// an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::new(format!("corrupt store file: {e}"))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::new(format!("read failed: {e}"))),
        }
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map().await?.remove(key))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_owned(), value.to_owned());
        let bytes = serde_json::to_vec_pretty(&map)
            .map_err(|e| StoreError::new(format!("serialize failed: {e}")))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::new(format!("write failed: {e}")))
    }
}

/// In-memory store used by tests and local experiments
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
