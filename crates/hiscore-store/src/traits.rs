use crate::error::StoreResult;
use crate::ranking;
use crate::record::ScoreRecord;

/// Append-only score storage with ranked reads.
///
/// All implementations must satisfy these invariants:
/// - `read_all` returns every durable record in insertion order.
/// - `append` adds exactly one record to the end and leaves existing records
///   unchanged.
/// - Operations on one instance are mutually exclusive. No caller observes a
///   half-applied `append`, and concurrent appends never lose a record.
/// - Failures are returned, never retried internally.
pub trait ScoreStore: Send + Sync {
    /// Return every record currently stored, in insertion order.
    fn read_all(&self) -> StoreResult<Vec<ScoreRecord>>;

    /// Durably add one record to the end of the collection.
    fn append(&self, record: ScoreRecord) -> StoreResult<()>;

    /// Return the `n` highest-scoring records, ties in insertion order.
    ///
    /// The default implementation ranks the result of [`read_all`](Self::read_all).
    fn top_n(&self, n: usize) -> StoreResult<Vec<ScoreRecord>> {
        Ok(ranking::top_n(self.read_all()?, n))
    }
}
