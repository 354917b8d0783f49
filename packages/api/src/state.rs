// ABOUTME: Shared application state handed to every handler
// ABOUTME: Owns the single session and the services built around it

use std::sync::Arc;

use linkedpush_auth::OAuthManager;
use linkedpush_config::AppConfig;
use linkedpush_core::Session;
use linkedpush_publish::Publisher;
use linkedpush_users::UserStorage;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub oauth: Arc<OAuthManager>,
    pub publisher: Arc<Publisher>,
    pub users: UserStorage,
}

impl AppState {
    /// Wire the OAuth flow and publisher to one fresh, empty session
    pub fn from_config(config: &AppConfig, users: UserStorage) -> Self {
        let session = Arc::new(Session::new());

        let oauth = OAuthManager::new(
            config.oauth.clone(),
            config.endpoints.clone(),
            session.clone(),
            users.clone(),
        );
        let publisher = Publisher::new(config.endpoints.clone(), session.clone(), config.production);

        Self {
            session,
            oauth: Arc::new(oauth),
            publisher: Arc::new(publisher),
            users,
        }
    }
}
