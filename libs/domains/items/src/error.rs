use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound,

    #[error("Item with id '{0}' already exists")]
    DuplicateId(String),

    #[error("Invalid request payload: {0}")]
    Payload(String),

    #[error("Upload failed: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ItemError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ItemError::DuplicateId(_) => (StatusCode::CONFLICT, self.to_string()),
            ItemError::Payload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Generic fault path: details go to the log, never to the client
            ItemError::Upload(_) | ItemError::Database(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
