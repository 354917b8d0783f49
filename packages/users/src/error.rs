// ABOUTME: Error types for the user store
// ABOUTME: Wraps SQLx and migration failures and reports missing users

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
