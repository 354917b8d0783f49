// ABOUTME: HTTP API layer for linkedpush providing the OAuth and webhook endpoints
// ABOUTME: Integration layer that wires the auth, publish, and user packages into one router

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod oauth_handlers;
pub mod publish_handlers;
pub mod state;
pub mod users_handlers;

pub use error::ApiError;
pub use state::AppState;

/// Creates the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // OAuth
        .route("/auth-url", get(oauth_handlers::auth_url))
        .route("/auth", get(oauth_handlers::auth_callback))
        // Webhook
        .route("/publish", post(publish_handlers::publish))
        // Users
        .route("/user/{id}", get(users_handlers::get_user))
        .route("/health", get(users_handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
