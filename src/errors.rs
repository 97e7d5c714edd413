use crate::{metadata::MetaError, storage::BlobError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Domain failure taxonomy shared by the orchestrator and the
/// reconciliation engine.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Validation failure raised before any store mutation.
    #[error("{0}")]
    BadInput(String),

    /// The target path is already occupied by a live record or blob.
    #[error("{0}")]
    Conflict(String),

    /// Nothing resolvable by id, path, or name, including after the
    /// bounded read-after-write retry.
    #[error("{0}")]
    NotFound(String),

    /// Path whose first segment is missing or not a numeric owner id.
    #[error("path `{0}` does not carry a numeric owner segment")]
    MalformedPath(String),

    /// Blob backend failure, surfaced as-is without retry.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// Metadata backend failure.
    #[error(transparent)]
    Meta(MetaError),
}

pub type IndexResult<T> = Result<T, IndexError>;

impl From<MetaError> for IndexError {
    fn from(err: MetaError) -> Self {
        match err {
            MetaError::DuplicatePath(path) => {
                IndexError::Conflict(format!("an object already exists at `{path}`"))
            }
            other => IndexError::Meta(other),
        }
    }
}

/// A lightweight wrapper for HTTP-facing errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Shortcut for 404 Not Found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

impl From<IndexError> for AppError {
    fn from(err: IndexError) -> Self {
        let status = match &err {
            IndexError::BadInput(_) | IndexError::MalformedPath(_) => StatusCode::BAD_REQUEST,
            IndexError::Conflict(_) => StatusCode::CONFLICT,
            IndexError::NotFound(_) => StatusCode::NOT_FOUND,
            IndexError::Blob(_) | IndexError::Meta(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err.to_string())
    }
}
