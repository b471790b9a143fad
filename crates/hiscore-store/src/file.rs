use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::ranking;
use crate::record::ScoreRecord;
use crate::traits::ScoreStore;

/// Score store backed by a single JSON file.
///
/// Every public operation takes the same exclusive lock for its whole
/// duration, so the file is never read while a write is in progress and two
/// appends never interleave. `append` is a read-modify-write of the entire
/// document: it costs O(n) per call and is not crash-atomic, so a failed
/// write can leave the file truncated.
///
/// The lock is per instance. Construct one store per file and share it.
pub struct JsonFileScoreStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileScoreStore {
    /// Create a store for the file at `path`. No I/O happens until the first
    /// operation; a missing file is initialized as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn exclusive(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`; the durable state is re-read from disk by
        // every operation, so a panic in another holder leaves nothing stale.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the full collection. Caller must hold the lock.
    fn load_unlocked(&self) -> StoreResult<Vec<ScoreRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "initializing empty score storage");
                self.write_unlocked(codec::EMPTY_DOCUMENT)?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let records = codec::decode(&text).map_err(|e| e.at_path(&self.path))?;
        debug!(path = %self.path.display(), count = records.len(), "loaded scores");
        Ok(records)
    }

    /// Overwrite the file with the full collection. Caller must hold the lock.
    fn persist_unlocked(&self, records: &[ScoreRecord]) -> StoreResult<()> {
        let text = codec::encode(records)?;
        self.write_unlocked(&text)?;
        debug!(path = %self.path.display(), count = records.len(), "persisted scores");
        Ok(())
    }

    fn write_unlocked(&self, text: &str) -> StoreResult<()> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, text).map_err(write_err)
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn read_all(&self) -> StoreResult<Vec<ScoreRecord>> {
        let _guard = self.exclusive();
        self.load_unlocked()
    }

    fn append(&self, record: ScoreRecord) -> StoreResult<()> {
        let _guard = self.exclusive();
        let mut records = self.load_unlocked()?;
        records.push(record);
        self.persist_unlocked(&records)
    }

    fn top_n(&self, n: usize) -> StoreResult<Vec<ScoreRecord>> {
        let _guard = self.exclusive();
        Ok(ranking::top_n(self.load_unlocked()?, n))
    }
}

impl std::fmt::Debug for JsonFileScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileScoreStore")
            .field("path", &self.path)
            .finish()
    }
}
