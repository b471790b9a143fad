use serde::{Deserialize, Serialize};

/// One player-name/score pair.
///
/// The store accepts any record handed to it; non-empty names are enforced
/// by the submission layer. Earlier deployments wrote `Name`/`Score`, so
/// both spellings are accepted when decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Score")]
    pub score: u64,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self { name: name.into(), score }
    }
}
