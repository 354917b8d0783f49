// ABOUTME: linkedpush authentication library providing the LinkedIn OAuth flow
// ABOUTME: Populates the process session and resolves the operator's local user

pub mod error;
pub mod oauth;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use oauth::{OAuthManager, TokenResponse};
