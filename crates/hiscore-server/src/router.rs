use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use hiscore_store::ScoreStore;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all leaderboard endpoints.
pub fn build_router(config: &ServerConfig, store: Arc<dyn ScoreStore>) -> Router {
    let state = AppState::new(store, config.top_n);
    Router::new()
        .route(
            &config.score_route(),
            get(handler::get_top_scores).post(handler::add_score),
        )
        .route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
