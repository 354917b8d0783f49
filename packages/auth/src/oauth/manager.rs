// ABOUTME: OAuth manager orchestrating the LinkedIn authorization flow
// ABOUTME: Builds the consent URL, exchanges codes, fills the session, and resolves the local user

use std::sync::Arc;

use linkedpush_config::OAuthClientConfig;
use linkedpush_core::{Credentials, LinkedInEndpoints, Session, LINKEDIN_SCOPES};
use linkedpush_users::{ContactHandle, User, UserStorage};
use reqwest::{Client, Response};
use tracing::{debug, error, info};
use url::form_urlencoded;

use crate::{
    error::{AuthError, AuthResult},
    oauth::types::{MemberHandlesResponse, MemberIdResponse, TokenResponse},
};

/// OAuth manager for the single operator account
pub struct OAuthManager {
    client: Client,
    config: OAuthClientConfig,
    endpoints: LinkedInEndpoints,
    session: Arc<Session>,
    users: UserStorage,
}

impl OAuthManager {
    pub fn new(
        config: OAuthClientConfig,
        endpoints: LinkedInEndpoints,
        session: Arc<Session>,
        users: UserStorage,
    ) -> Self {
        Self {
            client: Client::new(),
            config,
            endpoints,
            session,
            users,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build the LinkedIn consent URL the operator is redirected to
    pub fn begin_authorization(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &LINKEDIN_SCOPES.join(" "))
            .finish();

        format!("{}?{}", self.endpoints.authorization_url(), query)
    }

    /// Finish authorization and resolve the operator's local user.
    ///
    /// This will:
    /// 1. Exchange `code` (when given) for an access token
    /// 2. Fetch the member id with that token and store both in the session
    /// 3. Fail with `Unauthenticated` if the session still has no token
    /// 4. Fetch the account's primary contact handle
    /// 5. Find or create the user keyed by that handle
    pub async fn complete_authorization(&self, code: Option<&str>) -> AuthResult<User> {
        if let Some(code) = code {
            info!("Received authorization code, exchanging for token");
            let token = self.exchange_code_for_token(code).await?;
            debug!("Access token expires in {:?} seconds", token.expires_in);
            let member_id = self.fetch_member_id(&token.access_token).await?;
            self.session
                .establish(Credentials::new(token.access_token, member_id))
                .await;
            info!("✅ Session established");
        }

        let access_token = self.session.access_token().await.ok_or_else(|| {
            debug!("No session token; authorization has not been completed");
            AuthError::Unauthenticated
        })?;

        let contact = self.fetch_primary_contact(&access_token).await?;
        debug!("Resolved primary contact handle of type {}", contact.column());

        let user = self.users.find_or_create(&contact, &access_token).await?;
        info!("✅ Authorized as user {}", user.id);
        Ok(user)
    }

    /// Exchange authorization code for access token
    async fn exchange_code_for_token(&self, code: &str) -> AuthResult<TokenResponse> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoints.token_url())
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::TokenExchange(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            // Don't leak full response body - only log status for security
            error!("Token exchange failed with status {}", status);
            return Err(AuthError::TokenExchange(format!("status {}", status)));
        }

        response.json().await.map_err(|e| {
            AuthError::TokenExchange(format!("unreadable token response: {}", e))
        })
    }

    async fn fetch_member_id(&self, access_token: &str) -> AuthResult<String> {
        let response = self
            .client
            .get(self.endpoints.profile_url())
            .query(&[("projection", "(id)")])
            .bearer_auth(access_token)
            .send()
            .await?;

        let profile: MemberIdResponse = check_status(response, "profile").await?.json().await?;
        Ok(profile.id)
    }

    async fn fetch_primary_contact(&self, access_token: &str) -> AuthResult<ContactHandle> {
        let response = self
            .client
            .get(self.endpoints.contact_handles_url())
            .query(&[
                ("q", "members"),
                ("projection", "(elements*(primary,type,handle~))"),
            ])
            .bearer_auth(access_token)
            .send()
            .await?;

        let handles: MemberHandlesResponse = check_status(response, "contact handles")
            .await?
            .json()
            .await?;
        handles.primary_contact()
    }
}

async fn check_status(response: Response, what: &str) -> AuthResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    error!("LinkedIn {} request failed with status {}", what, status);
    Err(AuthError::Provider(format!(
        "LinkedIn {} request failed with status {}",
        what, status
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn manager() -> OAuthManager {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy("sqlite::memory:")
            .unwrap();
        OAuthManager::new(
            OAuthClientConfig {
                client_id: "client-123".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://localhost:4001/auth".to_string(),
            },
            LinkedInEndpoints::default(),
            Arc::new(Session::new()),
            UserStorage::new(pool),
        )
    }

    #[tokio::test]
    async fn test_begin_authorization_url() {
        let url = manager().await.begin_authorization();

        assert!(url.starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A4001%2Fauth"));
        assert!(url.contains("scope=r_liteprofile+r_emailaddress+w_member_social"));
    }

    #[tokio::test]
    async fn test_complete_without_code_or_session_is_unauthenticated() {
        let manager = manager().await;
        let result = manager.complete_authorization(None).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
        assert!(!manager.session().is_authenticated().await);
    }
}
