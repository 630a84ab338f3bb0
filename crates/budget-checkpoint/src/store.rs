//! Sled-backed checkpoint persistence.
//!
//! [`CheckpointDb`] owns the embedded database; [`SyncCheckpointStore`] is a
//! per-kind handle over one key in it. Stores for distinct kinds never
//! interfere. Concurrent writers on the same kind are not ordered here; the
//! substrate resolves the race (last write wins) and callers needing more
//! must serialize their own sync cycles per kind.

use std::fs;
use std::path::{Path, PathBuf};

use sled::{Config as SledConfig, Db};
use tracing::debug;

use crate::entity::EntityKind;

/// Cache given to sled; checkpoint cells are tiny, so keep it small.
const SLED_CACHE_BYTES: u64 = 1024 * 1024;

/// Errors emitted by the checkpoint store.
///
/// Substrate failures surface unmasked; there is no retry at this layer.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("database error: {0}")]
    Db(#[from] sled::Error),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the embedded database backing all checkpoint cells.
///
/// Cloneable; clones share the same underlying database.
#[derive(Debug, Clone)]
pub struct CheckpointDb {
    db: Db,
    path: PathBuf,
}

impl CheckpointDb {
    /// Opens (or creates) the checkpoint database at the provided path.
    ///
    /// Intermediate directories are created as needed; sled does not create
    /// them itself.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CheckpointError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = SledConfig::new()
            .path(&path)
            .cache_capacity(SLED_CACHE_BYTES)
            .open()?;
        debug!(path = %path.display(), "checkpoint database opened");
        Ok(Self { db, path })
    }

    /// Opens the database under `root/<namespace>`.
    ///
    /// The namespace comes from the configuration registry, so the test
    /// harness and real environments resolve to distinct on-disk stores.
    pub fn open_namespaced<P: AsRef<Path>>(
        root: P,
        namespace: &str,
    ) -> Result<Self, CheckpointError> {
        Self::open(root.as_ref().join(namespace))
    }

    /// Opens an in-memory database (ephemeral across restarts), for tests.
    pub fn open_ephemeral() -> Result<Self, CheckpointError> {
        let db = SledConfig::new().temporary(true).open()?;
        Ok(Self {
            db,
            path: PathBuf::new(),
        })
    }

    /// Returns the filesystem path backing the database.
    ///
    /// Ephemeral databases return an empty path because data resides in
    /// memory only.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes pending writes to disk.
    pub fn flush(&self) -> Result<(), CheckpointError> {
        self.db.flush()?;
        Ok(())
    }
}

/// Type-safe accessor over one entity kind's checkpoint cell.
#[derive(Debug, Clone)]
pub struct SyncCheckpointStore {
    db: CheckpointDb,
    kind: EntityKind,
}

impl SyncCheckpointStore {
    /// Creates the store for `kind` over the shared database handle.
    pub fn new(db: &CheckpointDb, kind: EntityKind) -> Self {
        Self {
            db: db.clone(),
            kind,
        }
    }

    /// The entity kind this store tracks.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the last persisted checkpoint timestamp, or `Ok(None)` when
    /// this kind has never synchronized. Absence is the error-free
    /// "no prior sync" signal, not a failure.
    pub fn get(&self) -> Result<Option<String>, CheckpointError> {
        let value = self.db.db.get(self.kind.storage_key())?;
        Ok(value.map(|bytes| String::from_utf8_lossy(&bytes).to_string()))
    }

    /// Persists a new checkpoint timestamp, or clears the cell when `None`
    /// is passed. Flushed so the write survives a process restart.
    pub fn set(&self, value: Option<&str>) -> Result<(), CheckpointError> {
        let key = self.kind.storage_key();
        match value {
            Some(timestamp) => {
                self.db.db.insert(key, timestamp.as_bytes())?;
            }
            None => {
                self.db.db.remove(key)?;
            }
        }
        self.db.db.flush()?;
        debug!(kind = %self.kind, cleared = value.is_none(), "checkpoint updated");
        Ok(())
    }
}
