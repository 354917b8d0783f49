// ABOUTME: HTTP request handlers for user and service status
// ABOUTME: Profile lookup targeted by the OAuth redirect, plus a health probe

use axum::{
    extract::{Path, State},
    Json,
};
use linkedpush_users::MaskedUser;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Get user by ID (token masked)
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MaskedUser>, ApiError> {
    info!("Getting user: {}", user_id);

    let user = state.users.get_user(&user_id).await?;
    Ok(Json(user.into()))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "authenticated": state.session.is_authenticated().await,
    }))
}
