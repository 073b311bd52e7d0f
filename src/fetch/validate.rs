//! URL validation and normalization utilities.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

fn invalid(url: &str, reason: impl Into<String>) -> FetchError {
    FetchError::InvalidUrl {
        url: url.to_string(),
        reason: reason.into(),
    }
}

// A scheme is only recognized before any path or query, so `://` inside a
// query string does not count.
fn has_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if the scheme is missing, then checks that the
/// URL is syntactically valid, uses http/https and is at most
/// `MAX_URL_LENGTH` characters long.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing why the URL was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<url::Url, FetchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(invalid(url, "empty URL"));
    }

    let normalized = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    // Checked after normalization since the prefix could push it over the limit
    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(
            url,
            format!(
                "exceeds maximum length ({} > {})",
                normalized.len(),
                MAX_URL_LENGTH
            ),
        ));
    }

    let parsed = url::Url::parse(&normalized).map_err(|e| invalid(url, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(url, format!("unsupported scheme '{other}'"))),
    }
}
