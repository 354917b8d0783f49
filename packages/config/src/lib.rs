// ABOUTME: Configuration package for linkedpush
// ABOUTME: Environment variable names and the typed AppConfig built from them

pub mod constants;
pub mod settings;

pub use settings::{AppConfig, ConfigError, OAuthClientConfig};
