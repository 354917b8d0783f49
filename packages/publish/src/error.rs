// ABOUTME: Error types for the publish pipeline
// ABOUTME: Local validation failures and remote post rejections

use thiserror::Error;

pub type PublishResult<T> = Result<T, PublishError>;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("No commit found.")]
    MissingCommit,

    #[error("No repository found.")]
    MissingRepository,

    #[error("Unauthorized")]
    Unauthenticated,

    #[error("{0}")]
    PublishRejected(String),
}
