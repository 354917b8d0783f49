// ABOUTME: Push-event webhook body as delivered by GitHub
// ABOUTME: Only the fields the publish pipeline reads; everything else is ignored

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    #[serde(default)]
    pub head_commit: Option<HeadCommit>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadCommit {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub url: String,
}

impl PushEvent {
    pub fn new(message: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            head_commit: Some(HeadCommit {
                message: message.into(),
            }),
            repository: Some(Repository {
                url: repository_url.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_github_push_payload() {
        let event: PushEvent = serde_json::from_value(json!({
            "ref": "refs/heads/main",
            "head_commit": {
                "id": "abc123",
                "message": "ship it @linkedpush",
                "author": { "name": "octo" }
            },
            "repository": { "url": "https://github.com/x/y", "full_name": "x/y" }
        }))
        .unwrap();

        assert_eq!(event.head_commit.unwrap().message, "ship it @linkedpush");
        assert_eq!(event.repository.unwrap().url, "https://github.com/x/y");
    }

    #[test]
    fn test_null_head_commit_is_absent() {
        // GitHub sends `"head_commit": null` for branch deletions.
        let event: PushEvent = serde_json::from_value(json!({
            "head_commit": null,
            "repository": { "url": "https://github.com/x/y" }
        }))
        .unwrap();
        assert!(event.head_commit.is_none());
    }
}
