// ABOUTME: Core types shared by the linkedpush auth and publish flows
// ABOUTME: Process-wide session state, LinkedIn endpoint set, and fixed constants

pub mod constants;
pub mod endpoints;
pub mod session;

// Re-export main types
pub use endpoints::LinkedInEndpoints;
pub use session::{Credentials, Session};

// Re-export constants
pub use constants::{
    DISALLOWED_SYMBOLS, LINKEDIN_SCOPES, MARKER_TAG, PROMO_LINE, RESTLI_PROTOCOL_VERSION,
};
