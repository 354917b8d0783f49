// ABOUTME: Single-tenant session state shared by the auth and publish flows
// ABOUTME: Holds the operator's access token and LinkedIn member id for the process lifetime

use tokio::sync::RwLock;
use tracing::debug;

/// Access token paired with the member id it was issued for
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub member_id: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            member_id: member_id.into(),
        }
    }

    /// Author urn used on outbound posts
    pub fn author_urn(&self) -> String {
        format!("urn:li:person:{}", self.member_id)
    }
}

// Never print the token itself.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("member_id", &self.member_id)
            .finish()
    }
}

/// Session state for the one operator account this process serves.
///
/// Starts empty. The OAuth flow is the only writer and replaces the token and
/// member id together through [`Session::establish`], so a reader never sees
/// one without the other. Two authorization flows completing at the same time
/// still race: the last `establish` wins. Callers are expected to run at most
/// one authorization at a time.
#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<Option<Credentials>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current credentials
    pub async fn establish(&self, credentials: Credentials) {
        debug!("Establishing session for member {}", credentials.member_id);
        *self.inner.write().await = Some(credentials);
    }

    /// Copy of the current credentials, if authorized
    pub async fn credentials(&self) -> Option<Credentials> {
        self.inner.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|c| c.access_token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
