// ABOUTME: Application configuration loaded from the environment
// ABOUTME: OAuth client settings, bind address, database URL, and LinkedIn endpoint overrides

use std::env;
use std::num::ParseIntError;

use linkedpush_core::LinkedInEndpoints;
use thiserror::Error;
use tracing::warn;

use crate::constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

/// OAuth application registered with LinkedIn
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub oauth: OAuthClientConfig,
    /// Publish posts publicly instead of to connections only
    pub production: bool,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub endpoints: LinkedInEndpoints,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let oauth = OAuthClientConfig {
            client_id: required(APP_ID)?,
            client_secret: required(APP_SECRET)?,
            redirect_uri: required(REDIRECT_URI)?,
        };

        let production = lookup(PRODUCTION)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let port = match lookup(PORT) {
            Some(raw) => validate_port(raw.trim().parse::<u16>()?)?,
            None => DEFAULT_PORT,
        };

        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let database_url =
            lookup(DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let mut endpoints = LinkedInEndpoints::default();
        if let Some(url) = lookup(LINKEDIN_AUTH_URL) {
            warn!("Overriding LinkedIn OAuth host with {}", url);
            endpoints.auth_base_url = url;
        }
        if let Some(url) = lookup(LINKEDIN_API_URL) {
            warn!("Overriding LinkedIn API host with {}", url);
            endpoints.api_base_url = url;
        }
        if let Some(version) = lookup(LINKEDIN_VERSION) {
            endpoints.api_version = version;
        }

        Ok(AppConfig {
            oauth,
            production,
            host,
            port,
            database_url,
            endpoints,
        })
    }

    /// Replace the bind port, applying the same range check as `PORT`
    pub fn override_port(&mut self, port: u16) -> Result<(), ConfigError> {
        self.port = validate_port(port)?;
        Ok(())
    }
}

fn validate_port(port: u16) -> Result<u16, ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}
