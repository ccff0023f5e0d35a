//! Artworks-API-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticError {
    /// The one error surfaced to callers; detail goes to the log
    #[error("failed to fetch artworks")]
    Fetch,

    #[error("artworks API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse artworks response: {0}")]
    Parse(#[from] serde_json::Error),
}
