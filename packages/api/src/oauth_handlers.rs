// ABOUTME: HTTP request handlers for LinkedIn OAuth
// ABOUTME: Redirects to the consent page and completes authorization on the callback

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters LinkedIn appends to the redirect URI
#[derive(Debug, Deserialize)]
pub struct AuthCallbackQuery {
    pub code: Option<String>,
}

/// 302 to `location`
pub(crate) fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Redirect the operator to LinkedIn's authorization page
pub async fn auth_url(State(state): State<AppState>) -> Response {
    info!("Redirecting to LinkedIn authorization");
    found(state.oauth.begin_authorization())
}

/// OAuth callback: exchange the code, then send the operator to their profile
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(query): Query<AuthCallbackQuery>,
) -> Result<Response, ApiError> {
    let code = query.code.as_deref().filter(|c| !c.is_empty());

    let user = state
        .oauth
        .complete_authorization(code)
        .await
        .inspect_err(|e| {
            if e.is_remote() {
                warn!("LinkedIn authorization call failed: {}", e);
            }
        })?;

    Ok(found(format!("/user/{}", user.id)))
}
