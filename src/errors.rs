// errors.rs
use crate::domain::ViewStateError;
use astra::Response;
use thiserror::Error;

/// Errors a route handler can end with. Each maps to one HTTP status.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Serialization Error: {0}")]
    JsonError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::XlsxError(_) | ServerError::JsonError(_) | ServerError::InternalError => {
                500
            }
        }
    }
}

impl From<ViewStateError> for ServerError {
    fn from(err: ViewStateError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
