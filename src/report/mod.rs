//! The analysis report and its renderers.
//!
//! A [`Report`] is built once per analysis from the extracted signals and the
//! scoring result, and is never modified afterwards.

mod json;
mod text;

use serde::Serialize;

use crate::models::{Issue, PageSignals};
use crate::score::Assessment;

// Re-export public API
pub use json::render_json;
pub use text::render_text;

/// Signals, score and issues for one analyzed URL.
///
/// Serializes with the signal fields flattened into the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    url: String,
    #[serde(flatten)]
    signals: PageSignals,
    score: u8,
    issues: Vec<Issue>,
}

impl Report {
    pub fn new(url: impl Into<String>, signals: PageSignals, assessment: Assessment) -> Self {
        Self {
            url: url.into(),
            signals,
            score: assessment.score,
            issues: assessment.issues,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn signals(&self) -> &PageSignals {
        &self.signals
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}
