//! Durable score storage for the hiscore leaderboard.
//!
//! A [`ScoreStore`] keeps an append-only collection of [`ScoreRecord`]s and
//! answers ranked reads over it. The production backend,
//! [`JsonFileScoreStore`], persists the whole collection as a single JSON
//! document and serializes every operation behind one exclusive lock.
//!
//! # Storage Backends
//!
//! - [`JsonFileScoreStore`] -- single JSON file, read-modify-write appends
//! - [`InMemoryScoreStore`] -- `Vec`-backed store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Records are immutable once appended. There is no update or delete.
//! 2. Reads return records in insertion order; ranking is derived on demand.
//! 3. At most one operation touches the backing file at any time.
//! 4. Every I/O and decode failure is propagated as a [`StoreError`].
//! 5. Writes overwrite the whole file. They are not crash-atomic.

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod ranking;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileScoreStore;
pub use memory::InMemoryScoreStore;
pub use record::ScoreRecord;
pub use traits::ScoreStore;
