// ABOUTME: User management package for linkedpush
// ABOUTME: Provides the user record types and the SQLite-backed identity store

pub mod error;
pub mod storage;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use storage::UserStorage;
pub use types::{ContactHandle, MaskedUser, User};
