//! On-disk encoding of the score collection.
//!
//! The document is an indented JSON array of `{"name", "score"}` objects in
//! insertion order:
//!
//! ```text
//! [
//!   {
//!     "name": "Alice",
//!     "score": 50
//!   }
//! ]
//! ```

use crate::error::{StoreError, StoreResult};
use crate::record::ScoreRecord;

/// Document written when storage is first initialized.
pub const EMPTY_DOCUMENT: &str = "[]";

/// Encode records as an indented JSON array.
pub fn encode(records: &[ScoreRecord]) -> StoreResult<String> {
    serde_json::to_string_pretty(records).map_err(StoreError::Encode)
}

/// Decode a score document.
///
/// Blank content and a bare `null` both decode to zero records. Anything
/// that is not an array of records is a [`StoreError::Decode`].
pub fn decode(text: &str) -> StoreResult<Vec<ScoreRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<ScoreRecord>> = serde_json::from_str(text)
        .map_err(|source| StoreError::Decode { path: None, source })?;
    Ok(records.unwrap_or_default())
}
