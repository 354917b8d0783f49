// ABOUTME: HTTP request handler for the push webhook
// ABOUTME: Runs the publish pipeline and reports skip or success as plain text

use axum::{extract::State, http::StatusCode, Json};
use linkedpush_core::MARKER_TAG;
use linkedpush_publish::{PublishOutcome, PushEvent};

use crate::error::ApiError;
use crate::state::AppState;

/// Publish the pushed head commit if it carries the marker tag
pub async fn publish(
    State(state): State<AppState>,
    Json(event): Json<PushEvent>,
) -> Result<(StatusCode, String), ApiError> {
    let outcome = state.publisher.publish(&event).await?;

    let body = match outcome {
        PublishOutcome::Skipped => format!("No '{}' tag found. Skipping...", MARKER_TAG),
        PublishOutcome::Published => "success".to_string(),
    };
    Ok((StatusCode::OK, body))
}
