// ABOUTME: OAuth module for the LinkedIn authorization flow
// ABOUTME: Includes the flow manager and the provider wire types

pub mod manager;
pub mod types;

pub use manager::OAuthManager;
pub use types::{MemberHandlesResponse, TokenResponse};
