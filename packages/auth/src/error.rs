// ABOUTME: Error types for authentication and OAuth operations
// ABOUTME: Covers missing sessions, provider failures, contact handle parsing, and storage errors

use linkedpush_users::StorageError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthorized. Please visit /auth-url to authorize.")]
    Unauthenticated,

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("LinkedIn returned no contact handle for this account")]
    MissingContactHandle,

    #[error("Unsupported contact handle type: {0}")]
    UnsupportedContactType(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// True for failures raised by a LinkedIn call rather than local state
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::TokenExchange(_)
                | Self::Provider(_)
                | Self::MissingContactHandle
                | Self::UnsupportedContactType(_)
                | Self::Http(_)
        )
    }
}
