//! Page fetching.
//!
//! This module retrieves the markup of a page:
//! - URL validation and normalization
//! - Manual redirect following with a hop limit
//!
//! Only this step performs I/O and only this step can fail an analysis.

mod redirects;
mod validate;

// Re-export public API
pub use redirects::{fetch_page, FetchedPage};
pub use validate::validate_and_normalize_url;
