//! seo_meta_checker library: SEO signal extraction and scoring for a web page.
//!
//! This library fetches one page, extracts its SEO signals (title, meta
//! description, canonical link, Open Graph and Twitter Card properties,
//! heading counts, robots directive) and scores them out of 10 with a list of
//! issues to fix.
//!
//! # Example
//!
//! ```no_run
//! use seo_meta_checker::{analyze_url, render_text, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = analyze_url(&config).await?;
//! println!("{}", render_text(&report));
//! # Ok(())
//! # }
//! ```
//!
//! Extraction and scoring are pure and can be used without any network access
//! through [`extract_signals`], [`score_signals`] and [`analyze_markup`].

#![warn(missing_docs)]

pub mod config;
#[allow(missing_docs)]
mod error_handling;
pub mod fetch;
pub mod initialization;
#[allow(missing_docs)]
mod models;
pub mod parse;
#[allow(missing_docs)]
mod report;
mod score;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{FetchError, InitializationError};
pub use models::{HeadingCounts, Issue, PageSignals, Severity};
pub use parse::extract_signals;
pub use report::{render_json, render_text, Report};
pub use run::{analyze_markup, analyze_url};
pub use score::{score_signals, Assessment};

// Internal run module (contains the analysis pipeline)
mod run {
    use log::{debug, info};

    use crate::config::Config;
    use crate::error_handling::FetchError;
    use crate::fetch::{fetch_page, validate_and_normalize_url};
    use crate::initialization::init_client;
    use crate::parse::extract_signals;
    use crate::report::Report;
    use crate::score::score_signals;

    /// Builds a report from markup that has already been fetched.
    ///
    /// Never fails: malformed markup only yields absent signals.
    pub fn analyze_markup(url: &str, markup: &str) -> Report {
        let signals = extract_signals(markup);
        let assessment = score_signals(&signals);
        debug!(
            "{}: score {} with {} issue(s)",
            url,
            assessment.score,
            assessment.issues.len()
        );
        Report::new(url, signals, assessment)
    }

    /// Fetches the configured URL and analyzes it.
    ///
    /// The report carries the URL as given in the configuration, even when
    /// redirects lead elsewhere.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the URL is invalid, the client cannot be
    /// built, the request fails, the redirect chain is too long, or the fetch
    /// exceeds [`Config::analysis_timeout`]. No partial report is produced.
    pub async fn analyze_url(config: &Config) -> Result<Report, FetchError> {
        let start_url = validate_and_normalize_url(&config.url)?;
        let client = init_client(config)?;

        let limit = config.analysis_timeout();
        info!("Analyzing {}", start_url);
        let page = tokio::time::timeout(
            limit,
            fetch_page(&client, start_url, config.max_redirects),
        )
        .await
        .map_err(|_| FetchError::Timeout {
            url: config.url.clone(),
            seconds: limit.as_secs(),
        })??;

        if page.redirect_chain.len() > 1 {
            info!(
                "Followed {} redirect(s) to {}",
                page.redirect_chain.len() - 1,
                page.final_url
            );
        }

        Ok(analyze_markup(&config.url, &page.body))
    }
}
