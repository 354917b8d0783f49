// ABOUTME: LinkedIn endpoint set used by the OAuth and publish clients
// ABOUTME: Hosts are configurable so tests can point the clients at a mock server

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com";
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com";
pub const DEFAULT_API_VERSION: &str = "202206";

/// Base URLs and API version for every LinkedIn call the service makes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInEndpoints {
    /// Host serving the OAuth authorization and token endpoints
    pub auth_base_url: String,
    /// Host serving the v2 and versioned REST APIs
    pub api_base_url: String,
    /// Value sent in the `LinkedIn-Version` header
    pub api_version: String,
}

impl Default for LinkedInEndpoints {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl LinkedInEndpoints {
    /// Endpoints with both hosts pointed at the same base (used against mock servers)
    pub fn with_base(base_url: &str) -> Self {
        Self {
            auth_base_url: base_url.to_string(),
            api_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn authorization_url(&self) -> String {
        format!("{}/oauth/v2/authorization", trim(&self.auth_base_url))
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/v2/accessToken", trim(&self.auth_base_url))
    }

    pub fn profile_url(&self) -> String {
        format!("{}/v2/me", trim(&self.api_base_url))
    }

    pub fn contact_handles_url(&self) -> String {
        format!("{}/v2/clientAwareMemberHandles", trim(&self.api_base_url))
    }

    pub fn posts_url(&self) -> String {
        format!("{}/rest/posts", trim(&self.api_base_url))
    }
}

fn trim(base: &str) -> &str {
    base.trim_end_matches('/')
}
