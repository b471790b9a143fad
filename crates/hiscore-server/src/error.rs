use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::submission::ValidationError;

/// Body returned for every server-side failure. Internal detail is logged,
/// never sent to the caller.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidBody(String),

    #[error("store error: {0}")]
    Store(#[from] hiscore_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
            (status, INTERNAL_ERROR_BODY).into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
