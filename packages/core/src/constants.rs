// ABOUTME: Fixed values shared across linkedpush packages
// ABOUTME: Marker tag, rejected symbols, OAuth scopes, and LinkedIn protocol headers

/// Substring a commit message must contain to opt into publishing
pub const MARKER_TAG: &str = "@linkedpush";

/// Characters the LinkedIn posts API rejects in commentary
pub const DISALLOWED_SYMBOLS: &[char] = &['(', ')', '@'];

/// Trailing line appended to every published post
pub const PROMO_LINE: &str = "⚙️ by https://github.com/CakeCrusher/linkedpush";

/// Scopes requested during authorization
pub const LINKEDIN_SCOPES: &[&str] = &["r_liteprofile", "r_emailaddress", "w_member_social"];

/// Value of the `X-Restli-Protocol-Version` header on REST calls
pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
