// src/analysis/error.rs
use thiserror::Error;

/// Failures of the comparison-run collaborator. These never touch the
/// currently installed matrix; they only surface as feedback.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned an unexpected body: {0}")]
    MalformedResponse(String),
    #[error("provider response was not a valid dimension list: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
