use crate::record::ScoreRecord;

/// Return the `n` highest-scoring records, best first.
///
/// The sort is stable, so records with equal scores keep their insertion
/// order. Fewer than `n` records are returned when fewer exist.
pub fn top_n(mut records: Vec<ScoreRecord>, n: usize) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(n);
    records
}
