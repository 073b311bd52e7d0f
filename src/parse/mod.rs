//! HTML signal extraction.
//!
//! This module extracts the SEO signals of a page from its raw markup:
//! - Title, canonical link and heading counts
//! - Meta tags (description, robots, Open Graph, Twitter Cards)
//!
//! Extraction is done with regular expressions over the raw text instead of a
//! parsed DOM. Every rule is total: a signal that cannot be found is reported
//! as absent, never as an error.

mod html;
mod meta;

use regex::Regex;

use crate::models::PageSignals;

// Re-export public API
pub use html::{count_headings, extract_canonical, extract_title};
pub use meta::{extract_meta_tags, get_attr, MetaTags};

/// Extracts every signal from `markup`.
///
/// Pure function of its input; calling it twice on the same markup yields
/// equal records.
///
/// # Examples
///
/// ```
/// use seo_meta_checker::extract_signals;
///
/// let signals = extract_signals(r#"<title> Hello </title><meta name="robots" content="noindex">"#);
/// assert_eq!(signals.title.as_deref(), Some("Hello"));
/// assert_eq!(signals.robots.as_deref(), Some("noindex"));
/// ```
pub fn extract_signals(markup: &str) -> PageSignals {
    let MetaTags {
        description,
        robots,
        open_graph,
        twitter_card,
    } = extract_meta_tags(markup);

    PageSignals {
        title: extract_title(markup),
        description,
        canonical: extract_canonical(markup),
        open_graph,
        twitter_card,
        robots,
        heading_counts: count_headings(markup),
    }
}

/// Compiles a regex pattern, panicking with a detailed error message if
/// compilation fails. Used for patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
