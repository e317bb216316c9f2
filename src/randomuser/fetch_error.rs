use thiserror::Error;

/// Failures while retrieving the raw user list. None of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request was not ok: HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON decode error: {0}")]
    Decode(String),
}
