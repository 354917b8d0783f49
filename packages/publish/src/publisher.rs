// ABOUTME: Publish pipeline turning tagged push events into LinkedIn posts
// ABOUTME: Validates, filters, sanitizes, checks the session, and submits the post

use std::sync::Arc;

use linkedpush_core::{LinkedInEndpoints, Session, RESTLI_PROTOCOL_VERSION};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::{
    error::{PublishError, PublishResult},
    event::PushEvent,
    payload::{PostPayload, Visibility},
    sanitize::{compose_commentary, has_marker},
};

/// Result of a publish request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The commit did not carry the marker tag
    Skipped,
    /// LinkedIn accepted the post
    Published,
}

pub struct Publisher {
    client: Client,
    endpoints: LinkedInEndpoints,
    session: Arc<Session>,
    visibility: Visibility,
}

impl Publisher {
    pub fn new(endpoints: LinkedInEndpoints, session: Arc<Session>, production: bool) -> Self {
        Self {
            client: Client::new(),
            endpoints,
            session,
            visibility: Visibility::for_environment(production),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Publish the head commit of `event` if it opted in.
    ///
    /// Every local check runs before LinkedIn is contacted; a rejected post is
    /// reported once and never retried.
    pub async fn publish(&self, event: &PushEvent) -> PublishResult<PublishOutcome> {
        let commit = event.head_commit.as_ref().ok_or_else(|| {
            info!("No commit found.");
            PublishError::MissingCommit
        })?;

        if !has_marker(&commit.message) {
            info!("No linkedpush tag found. Skipping...");
            return Ok(PublishOutcome::Skipped);
        }

        let repository = event
            .repository
            .as_ref()
            .ok_or(PublishError::MissingRepository)?;
        let commentary = compose_commentary(&commit.message, &repository.url);

        let credentials = self.session.credentials().await.ok_or_else(|| {
            info!("No token found. Please authenticate first.");
            PublishError::Unauthenticated
        })?;

        let payload = PostPayload::new(credentials.author_urn(), commentary, self.visibility);
        debug!("Submitting post with visibility {:?}", payload.visibility);

        let response = self
            .client
            .post(self.endpoints.posts_url())
            .bearer_auth(&credentials.access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .header("LinkedIn-Version", &self.endpoints.api_version)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to post. Error: {}", e);
                PublishError::PublishRejected(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Failed to post. LinkedIn responded with status {}", status);
            return Err(PublishError::PublishRejected(rejection_detail(
                status.as_u16(),
                &body,
            )));
        }

        info!("Successfully posted to LinkedIn.");
        Ok(PublishOutcome::Published)
    }
}

fn rejection_detail(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status code {}", status)
    } else {
        format!("Request failed with status code {}: {}", status, body)
    }
}
