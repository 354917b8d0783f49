// ABOUTME: HTTP error mapping for the API handlers
// ABOUTME: Converts auth, publish, and storage failures into status codes with plain-text bodies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkedpush_auth::AuthError;
use linkedpush_publish::PublishError;
use linkedpush_users::StorageError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::Storage(e)) => storage_status(e),
            // Remote failures surface as 401 with the underlying message
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Publish(PublishError::MissingCommit)
            | ApiError::Publish(PublishError::MissingRepository) => StatusCode::BAD_REQUEST,
            ApiError::Publish(PublishError::Unauthenticated)
            | ApiError::Publish(PublishError::PublishRejected(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Storage(e) => storage_status(e),
        }
    }
}

fn storage_status(e: &StorageError) -> StatusCode {
    match e {
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!("Internal error: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
