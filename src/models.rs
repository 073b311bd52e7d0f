//! Value records shared by the extractor, the scorer and the report.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter};

/// Number of heading levels tracked (`<h1>` through `<h6>`).
pub const HEADING_LEVELS: usize = 6;

/// Occurrence counts of opening heading tags, indexed by level 1..=6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts([usize; HEADING_LEVELS]);

impl HeadingCounts {
    /// Builds counts from an array where index 0 holds the `<h1>` count.
    pub fn new(counts: [usize; HEADING_LEVELS]) -> Self {
        Self(counts)
    }

    /// Returns the count for `level` (1..=6); any other level counts as 0.
    pub fn get(&self, level: usize) -> usize {
        match level {
            1..=HEADING_LEVELS => self.0[level - 1],
            _ => 0,
        }
    }

    pub fn h1(&self) -> usize {
        self.get(1)
    }

    pub fn h2(&self) -> usize {
        self.get(2)
    }
}

// Serialized as {"h1": n, ..., "h6": n}
impl Serialize for HeadingCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HEADING_LEVELS))?;
        for (index, count) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("h{}", index + 1), count)?;
        }
        map.end()
    }
}

/// SEO signals extracted from one page's markup.
///
/// Absent signals are `None` or empty maps, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    /// `og:*` properties keyed by the suffix after `og:`
    pub open_graph: BTreeMap<String, String>,
    /// `twitter:*` properties keyed by the suffix after `twitter:`
    pub twitter_card: BTreeMap<String, String>,
    pub robots: Option<String>,
    pub heading_counts: HeadingCounts,
}

impl PageSignals {
    /// Returns the Open Graph value for `key` when it is present and non-empty.
    pub fn og(&self, key: &str) -> Option<&str> {
        self.open_graph
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Severity of a generated [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic about a missing or suboptimal signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}
