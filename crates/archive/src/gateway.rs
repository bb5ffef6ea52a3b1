//! Storage gateway boundary
//!
//! Archives and screenshots move to and from object storage through the
//! narrow [`StorageGateway`] trait: put and get bytes by key. Keys are
//! ziplocations (`{task_id}_{category}.zip`) and screenshot names
//! (`{id}.png`).
//!
//! Two gateways ship with the crate:
//!
//! - [`MemoryGateway`]: process-local map, for tests and local round-trips
//! - [`LocalDirGateway`]: one file per key under a root directory
//!
//! Gateways do not retry. Failures surface as [`StorageError`].

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::trace;

/// Storage gateway errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object stored under the key
    #[error("object not found: {key}")]
    NotFound {
        /// The missing key
        key: String,
    },

    /// Key cannot be mapped to a storage location
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O failure while accessing a key
    #[error("I/O error on {key}: {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Byte-level object storage
pub trait StorageGateway: Send + Sync {
    /// Store `bytes` under `key`, replacing any previous object
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Fetch the object stored under `key`
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// In-memory gateway
#[derive(Debug, Default)]
pub struct MemoryGateway {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryGateway {
    /// Create an empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Whether an object is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.objects.read().contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Remove an object, returning it if present
    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.write().remove(key)
    }
}

impl StorageGateway for MemoryGateway {
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        trace!(key, len = bytes.len(), "memory put");
        self.objects.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }
}

/// Directory-backed gateway
///
/// Each key is a relative path under the root directory. Keys that would
/// escape the root (absolute paths, `..`) are rejected.
#[derive(Debug, Clone)]
pub struct LocalDirGateway {
    root: PathBuf,
}

impl LocalDirGateway {
    /// Use an existing directory as the root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the root directory if needed
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let invalid = |reason: &str| StorageError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        if key.is_empty() {
            return Err(invalid("empty key"));
        }
        let relative = Path::new(key);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid("key must be a relative path without '..'"));
        }
        Ok(self.root.join(relative))
    }
}

impl StorageGateway for LocalDirGateway {
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, bytes).map_err(io_err)?;
        trace!(key, path = %path.display(), len = bytes.len(), "dir put");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Io {
                    key: key.to_string(),
                    source,
                }
            }
        })
    }
}
