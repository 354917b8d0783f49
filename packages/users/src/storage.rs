// ABOUTME: User storage layer using SQLite
// ABOUTME: Finds or creates users by contact handle and loads them by id

use chrono::Utc;
use sqlx::{migrate::Migrator, sqlite::SqliteRow, Row, SqlitePool};
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::types::{ContactHandle, User};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const USER_COLUMNS: &str = "id, email, phone_number, linkedin_token, created_at";

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply the bundled schema migrations
    pub async fn migrate(&self) -> StorageResult<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    pub async fn get_user(&self, user_id: &str) -> StorageResult<User> {
        debug!("Fetching user: {}", user_id);

        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::NotFound(user_id.to_string()))?;

        row_to_user(&row)
    }

    pub async fn find_by_contact(&self, contact: &ContactHandle) -> StorageResult<Option<User>> {
        // Column names come from ContactHandle::column(), never from input.
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE {} = ?",
            USER_COLUMNS,
            contact.column()
        ))
        .bind(contact.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Find the user owning `contact`, creating it with `token` on first sight.
    ///
    /// The token is only written at creation; later calls return the existing
    /// row untouched. The insert ignores unique-key conflicts and re-reads, so
    /// two callers racing on the same new handle end up with the same user.
    pub async fn find_or_create(&self, contact: &ContactHandle, token: &str) -> StorageResult<User> {
        if let Some(user) = self.find_by_contact(contact).await? {
            debug!("Found existing user {} for {}", user.id, contact.column());
            return Ok(user);
        }

        let id = nanoid::nanoid!();
        let column = contact.column();
        let inserted = sqlx::query(&format!(
            "INSERT INTO users (id, {column}, linkedin_token, created_at) VALUES (?, ?, ?, ?) \
             ON CONFLICT({column}) DO NOTHING"
        ))
        .bind(&id)
        .bind(contact.value())
        .bind(token)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() == 1 {
            info!("Created user {} keyed by {}", id, column);
        }

        self.find_by_contact(contact)
            .await?
            .ok_or_else(|| StorageError::NotFound(contact.to_string()))
    }

    pub async fn count_users(&self) -> StorageResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}

fn row_to_user(row: &SqliteRow) -> StorageResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        phone_number: row.try_get("phone_number")?,
        linkedin_token: row.try_get("linkedin_token")?,
        created_at: row.try_get("created_at")?,
    })
}
