// ABOUTME: User type definitions
// ABOUTME: Persisted user record and the contact handle it is keyed by

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary contact handle reported by LinkedIn for the operator account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactHandle {
    Email(String),
    Phone(String),
}

impl ContactHandle {
    /// Column the handle is stored in
    pub fn column(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Phone(_) => "phone_number",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Email(v) | Self::Phone(v) => v,
        }
    }
}

impl std::fmt::Display for ContactHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.column(), self.value())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// LinkedIn token captured when the user was first seen
    pub linkedin_token: String,
    pub created_at: DateTime<Utc>,
}

/// User as returned over HTTP, without the stored token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedUser {
    pub id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub has_linkedin_token: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for MaskedUser {
    fn from(user: User) -> Self {
        Self {
            has_linkedin_token: !user.linkedin_token.is_empty(),
            id: user.id,
            email: user.email,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}
