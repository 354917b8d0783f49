// ABOUTME: Request body for the LinkedIn posts API
// ABOUTME: Author urn, commentary, visibility, distribution, and lifecycle state

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Connections,
}

impl Visibility {
    /// Public posts in production, connections-only everywhere else
    pub fn for_environment(production: bool) -> Self {
        if production {
            Self::Public
        } else {
            Self::Connections
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedDistribution {
    MainFeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub feed_distribution: FeedDistribution,
    pub target_entities: Vec<String>,
    pub third_party_distribution_channels: Vec<String>,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            feed_distribution: FeedDistribution::MainFeed,
            target_entities: Vec::new(),
            third_party_distribution_channels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub author: String,
    pub commentary: String,
    pub visibility: Visibility,
    pub distribution: Distribution,
    pub lifecycle_state: LifecycleState,
}

impl PostPayload {
    pub fn new(author: String, commentary: String, visibility: Visibility) -> Self {
        Self {
            author,
            commentary,
            visibility,
            distribution: Distribution::default(),
            lifecycle_state: LifecycleState::Published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_visibility_policy() {
        assert_eq!(Visibility::for_environment(true), Visibility::Public);
        assert_eq!(Visibility::for_environment(false), Visibility::Connections);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = PostPayload::new(
            "urn:li:person:abc".to_string(),
            "hello".to_string(),
            Visibility::Connections,
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "author": "urn:li:person:abc",
                "commentary": "hello",
                "visibility": "CONNECTIONS",
                "distribution": {
                    "feedDistribution": "MAIN_FEED",
                    "targetEntities": [],
                    "thirdPartyDistributionChannels": []
                },
                "lifecycleState": "PUBLISHED"
            })
        );
    }
}
