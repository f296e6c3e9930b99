//! # Snapshot Slots
//!
//! A slot is a single key/value cell that holds the serialized snapshot.
//! [`FileSlot`] keeps it in `<dir>/<key>.json`; [`MemorySlot`] keeps it in
//! memory and can be shared between a test and the actor it feeds.
//!
//! Slots move opaque strings. Turning a snapshot into a string (and back) is
//! done by [`encode`] / [`decode`], so a slot never needs to know the state type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::runtime::{Handle, RuntimeFlavor};

/// Errors raised while reading or writing a slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Slot I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Slot lock poisoned")]
    Poisoned,
}

/// A single key/value cell holding a serialized snapshot.
///
/// `read` and `write` are synchronous and run on the actor's task, once per
/// applied change. Implementations that touch disk or the network must not
/// stall the runtime; [`FileSlot`] hands its I/O to [`blocking`].
pub trait SnapshotSlot: Send + Sync + 'static {
    /// The key this slot is stored under.
    fn key(&self) -> &str;

    /// Returns `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

pub fn encode<S: Serialize>(state: &S) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(StorageError::Encode)
}

pub fn decode<S: DeserializeOwned>(raw: &str) -> Result<S, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// Runs `f` where blocking is allowed.
///
/// On a multi-thread runtime the current worker is handed over with
/// [`tokio::task::block_in_place`]. A current-thread runtime cannot do that, so
/// `f` runs inline there, as it does outside any runtime.
pub fn blocking<R>(f: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

/// Slot backed by one JSON file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Slot at `<dir>/<key>.json`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            key: self.key.clone(),
            source,
        }
    }
}

impl SnapshotSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match blocking(|| fs::read_to_string(&self.path)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Writes to a sibling temp file, then renames it over the target so a
    /// crash never leaves a half-written snapshot behind.
    fn write(&self, contents: &str) -> Result<(), StorageError> {
        blocking(|| {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, contents)?;
            fs::rename(&tmp, &self.path)
        })
        .map_err(|e| self.io_error(e))
    }
}

/// In-memory slot. Clones share the same cell.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    cell: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// A slot that already holds `contents`, as if a previous run wrote it.
    pub fn with_contents(key: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cell: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }
}

impl SnapshotSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        let cell = self.cell.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(cell.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut cell = self.cell.lock().map_err(|_| StorageError::Poisoned)?;
        *cell = Some(contents.to_string());
        Ok(())
    }
}
