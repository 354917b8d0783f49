// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across linkedpush

// LinkedIn OAuth application
pub const APP_ID: &str = "APP_ID";
pub const APP_SECRET: &str = "APP_SECRET";
pub const REDIRECT_URI: &str = "REDIRECT_URI";

// Post visibility
pub const PRODUCTION: &str = "PRODUCTION";

// Server
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

// Storage
pub const DATABASE_URL: &str = "DATABASE_URL";

// LinkedIn endpoint overrides
pub const LINKEDIN_AUTH_URL: &str = "LINKEDIN_AUTH_URL";
pub const LINKEDIN_API_URL: &str = "LINKEDIN_API_URL";
pub const LINKEDIN_VERSION: &str = "LINKEDIN_VERSION";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://linkedpush.db?mode=rwc";
