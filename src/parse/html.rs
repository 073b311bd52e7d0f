//! Document-level signals: title, canonical link and heading counts.

use regex::Regex;
use std::sync::LazyLock;

use super::compile_regex_unsafe;
use crate::models::{HeadingCounts, HEADING_LEVELS};

// Text up to the next '<'; attributes on the opening tag are ignored
const TITLE_PATTERN: &str = r"(?i)<title[^>]*>([^<]+)</title>";
// rel must come before href inside the same <link> tag
const CANONICAL_PATTERN: &str =
    r#"(?i)<link[^>]+rel=["']canonical["'][^>]+href=["']([^"']+)["']"#;
// Level digit followed by whitespace or '>', so <h10> is not an <h1>
const HEADING_PATTERN: &str = r"(?i)<h([1-6])[\s>]";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CANONICAL_PATTERN, "CANONICAL_RE"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HEADING_PATTERN, "HEADING_RE"));

/// Extracts the page title from raw markup.
///
/// Takes the first `<title>` element, trimmed of whitespace. Returns `None`
/// if there is no title element or its text is blank.
pub fn extract_title(markup: &str) -> Option<String> {
    TITLE_RE
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// Extracts the `href` of the first `<link rel="canonical">` element.
///
/// Only tags where `rel` precedes `href` are recognized.
pub fn extract_canonical(markup: &str) -> Option<String> {
    CANONICAL_RE
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Counts opening `<h1>`..`<h6>` tags in one pass over the markup.
pub fn count_headings(markup: &str) -> HeadingCounts {
    let mut counts = [0usize; HEADING_LEVELS];
    for caps in HEADING_RE.captures_iter(markup) {
        let level = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .unwrap_or(0);
        if (1..=HEADING_LEVELS).contains(&level) {
            counts[level - 1] += 1;
        }
    }
    HeadingCounts::new(counts)
}
