// ABOUTME: Commit message filtering and sanitization
// ABOUTME: Marker detection, disallowed-symbol removal, and commentary composition

use linkedpush_core::{DISALLOWED_SYMBOLS, MARKER_TAG, PROMO_LINE};

/// Whether the commit opted into publishing
pub fn has_marker(message: &str) -> bool {
    message.contains(MARKER_TAG)
}

/// Drop every disallowed symbol, keeping the remaining characters in order
pub fn strip_disallowed(text: &str) -> String {
    text.chars()
        .filter(|c| !DISALLOWED_SYMBOLS.contains(c))
        .collect()
}

/// Remove the first marker tag, then every disallowed symbol
pub fn sanitize_message(message: &str) -> String {
    strip_disallowed(&message.replacen(MARKER_TAG, "", 1))
}

/// Post commentary: sanitized message, repository line, promo line
pub fn compose_commentary(message: &str, repository_url: &str) -> String {
    format!(
        "{}\nGitHub repo: {}\n\n{}",
        sanitize_message(message),
        strip_disallowed(repository_url),
        PROMO_LINE
    )
}
