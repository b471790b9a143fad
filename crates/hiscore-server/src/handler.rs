use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use hiscore_store::{ScoreRecord, ScoreStore, StoreResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::submission::ScoreSubmission;

/// Confirmation body for an accepted submission.
pub const SAVED_MESSAGE: &str = "Score saved successfully.";

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Run a blocking store call off the async runtime.
///
/// The call holds the store lock and does file I/O, so it runs on the
/// blocking pool. If the request is dropped the call still completes.
async fn run_blocking<T, F>(store: &Arc<dyn ScoreStore>, op: F) -> ServerResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn ScoreStore) -> StoreResult<T> + Send + 'static,
{
    let store = Arc::clone(store);
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(result?)
}

/// `GET {prefix}/score`: the top entries, best first.
pub async fn get_top_scores(State(state): State<AppState>) -> ServerResult<Json<Vec<ScoreRecord>>> {
    let n = state.top_n;
    debug!(n, "retrieving top scores");
    let top = run_blocking(&state.store, move |store| store.top_n(n)).await?;
    info!(count = top.len(), "returning top scores");
    Ok(Json(top))
}

/// `POST {prefix}/score`: validate and append one score.
pub async fn add_score(
    State(state): State<AppState>,
    submission: ScoreSubmission,
) -> ServerResult<&'static str> {
    debug!(name = %submission.name, score = submission.score, "received score submission");
    let record = submission
        .validate()
        .inspect_err(|e| warn!(reason = %e, "rejected score submission"))?;
    let name = record.name.clone();
    run_blocking(&state.store, move |store| store.append(record)).await?;
    info!(%name, "score saved");
    Ok(SAVED_MESSAGE)
}

/// `GET /health`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
