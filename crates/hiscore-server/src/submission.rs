//! Score submissions and the validation boundary in front of the store.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use hiscore_store::ScoreRecord;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ServerError;

/// A score as submitted by a client, before validation.
///
/// Accepted as a JSON body or as URL-encoded form fields. `Name`/`Score`
/// are accepted as aliases for game-engine clients that serialize
/// PascalCase fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(alias = "Score")]
    pub score: i64,
}

/// Reasons a submission is rejected before it reaches the store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Score must be a non-negative number.")]
    NegativeScore(i64),
}

impl ScoreSubmission {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self { name: name.into(), score }
    }

    /// Check the submission and convert it into a storable record.
    ///
    /// The name must contain a non-whitespace character; it is stored as
    /// submitted, untrimmed.
    pub fn validate(self) -> Result<ScoreRecord, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let score = u64::try_from(self.score).map_err(|_| ValidationError::NegativeScore(self.score))?;
        Ok(ScoreRecord::new(self.name, score))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S> FromRequest<S> for ScoreSubmission
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(submission) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::InvalidBody(rejection.body_text()))?;
            Ok(submission)
        } else {
            let Json(submission) = Json::<Self>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::InvalidBody(rejection.body_text()))?;
            Ok(submission)
        }
    }
}
