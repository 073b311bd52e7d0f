//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits and the scoring thresholds.

use std::ops::RangeInclusive;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "SEOMetaChecker/1.0";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Scoring thresholds
/// Title length (in characters) that earns full points
pub const TITLE_IDEAL_LENGTH: RangeInclusive<usize> = 30..=60;
/// Meta description length (in characters) that earns full points
pub const DESCRIPTION_IDEAL_LENGTH: RangeInclusive<usize> = 120..=160;
/// Highest attainable score
pub const MAX_SCORE: u8 = 10;

// Report rendering
/// Number of description characters shown in the text report
pub const DESCRIPTION_PREVIEW_CHARS: usize = 60;
/// Width of the separator rule under the URL in the text report
pub const REPORT_RULE_WIDTH: usize = 50;
