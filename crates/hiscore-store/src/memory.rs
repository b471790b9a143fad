use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreResult;
use crate::record::ScoreRecord;
use crate::traits::ScoreStore;

/// In-memory, `Vec`-based score store.
///
/// Intended for tests and embedding. Nothing is persisted; records live
/// behind a `Mutex` for the lifetime of the value.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl InMemoryScoreStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records` in the given order.
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<ScoreRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn read_all(&self) -> StoreResult<Vec<ScoreRecord>> {
        Ok(self.guard().clone())
    }

    fn append(&self, record: ScoreRecord) -> StoreResult<()> {
        self.guard().push(record);
        Ok(())
    }
}
