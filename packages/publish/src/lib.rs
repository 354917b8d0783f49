// ABOUTME: linkedpush publish pipeline
// ABOUTME: Republishes tagged commit messages from push webhooks as LinkedIn posts

pub mod error;
pub mod event;
pub mod payload;
pub mod publisher;
pub mod sanitize;

pub use error::{PublishError, PublishResult};
pub use event::{HeadCommit, PushEvent, Repository};
pub use payload::{PostPayload, Visibility};
pub use publisher::{PublishOutcome, Publisher};
