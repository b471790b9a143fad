use std::sync::Arc;

use hiscore_store::ScoreStore;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
    pub top_n: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>, top_n: usize) -> Self {
        Self { store, top_n }
    }
}
