use std::sync::Arc;

use hiscore_store::{JsonFileScoreStore, ScoreStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Leaderboard server. Owns the single store instance for the process.
pub struct HiscoreServer {
    config: ServerConfig,
    store: Arc<dyn ScoreStore>,
}

impl HiscoreServer {
    /// Create a server backed by a JSON file at `config.scores_path`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(JsonFileScoreStore::new(config.scores_path.clone()));
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn ScoreStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ScoreStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(&self.config, Arc::clone(&self.store))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        info!(
            addr = %self.config.bind_addr,
            route = %self.config.score_route(),
            scores = %self.config.scores_path.display(),
            "hiscore server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("hiscore server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
