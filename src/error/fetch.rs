//! Errors raised while fetching the wellness stats snapshot.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a stats fetch produced no snapshot.
///
/// The poller recovers from every variant locally; these never reach the
/// renderer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete, timed out, or came back with a non-2xx status.
    #[error("stats transport failed: {0}")]
    Transport(#[from] HttpError),

    /// The body was not JSON or did not have the expected shape.
    #[error("stats response could not be decoded: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(HttpError::Timeout(_)) => "E_FETCH_TIMEOUT",
            FetchError::Transport(HttpError::ServerError { .. }) => "E_FETCH_STATUS",
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Decode(_) => "E_FETCH_DECODE",
        }
    }

    /// Build a decode error from a serde failure.
    pub fn decode(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
