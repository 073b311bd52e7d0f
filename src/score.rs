//! Scoring of extracted signals.
//!
//! Rules run in a fixed order, each adding points to a fractional total and
//! possibly an issue. The total (at most 10.0) is rounded to the final score.
//! Issues keep rule order; they are not sorted by severity.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::config::{DESCRIPTION_IDEAL_LENGTH, MAX_SCORE, TITLE_IDEAL_LENGTH};
use crate::models::{Issue, PageSignals};

/// Value the robots directive must not equal to earn the robots point.
const NOINDEX: &str = "noindex";

/// Result of scoring one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// 0..=10
    pub score: u8,
    /// Issues in the order the rules raised them
    pub issues: Vec<Issue>,
}

#[derive(Default)]
struct Tally {
    points: f64,
    issues: Vec<Issue>,
}

impl Tally {
    fn award(&mut self, points: f64) {
        self.points += points;
    }

    fn flag(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    fn finish(self) -> Assessment {
        // Ties round up, matching f64::round for non-negative totals
        let score = self.points.round().clamp(0.0, f64::from(MAX_SCORE)) as u8;
        Assessment {
            score,
            issues: self.issues,
        }
    }
}

/// Scores `signals` and lists the issues found.
///
/// Deterministic and total: a record with every signal absent scores 1
/// (only the robots point) and yields the full set of issues.
///
/// # Examples
///
/// ```
/// use seo_meta_checker::{score_signals, PageSignals};
///
/// let assessment = score_signals(&PageSignals::default());
/// assert_eq!(assessment.score, 1);
/// assert_eq!(assessment.issues[0].message, "title tag missing");
/// ```
pub fn score_signals(signals: &PageSignals) -> Assessment {
    let mut tally = Tally::default();

    score_length(
        &mut tally,
        signals.title.as_deref(),
        "title",
        TITLE_IDEAL_LENGTH,
        "title tag missing",
    );
    score_length(
        &mut tally,
        signals.description.as_deref(),
        "description",
        DESCRIPTION_IDEAL_LENGTH,
        "meta description missing",
    );
    score_canonical(&mut tally, signals);
    score_open_graph(&mut tally, signals);
    score_h1(&mut tally, signals.heading_counts.h1());
    score_h2(&mut tally, signals.heading_counts.h2());
    score_robots(&mut tally, signals.robots.as_deref());

    tally.finish()
}

// 2 points in range, 1 point out of range, none when missing
fn score_length(
    tally: &mut Tally,
    value: Option<&str>,
    label: &str,
    ideal: RangeInclusive<usize>,
    missing: &str,
) {
    match value.filter(|v| !v.is_empty()) {
        Some(text) => {
            let length = text.chars().count();
            if ideal.contains(&length) {
                tally.award(2.0);
            } else {
                tally.award(1.0);
                tally.flag(Issue::warning(format!(
                    "{} length not ideal ({} characters, ideal: {}-{})",
                    label,
                    length,
                    ideal.start(),
                    ideal.end()
                )));
            }
        }
        None => tally.flag(Issue::error(missing)),
    }
}

fn score_canonical(tally: &mut Tally, signals: &PageSignals) {
    if signals.canonical.as_deref().is_some_and(|c| !c.is_empty()) {
        tally.award(1.0);
    } else {
        tally.flag(Issue::warning("canonical URL not defined"));
    }
}

// og:description and og:url score without raising issues when missing
fn score_open_graph(tally: &mut Tally, signals: &PageSignals) {
    if signals.og("title").is_some() {
        tally.award(0.5);
    } else {
        tally.flag(Issue::warning("OG:Title missing"));
    }
    if signals.og("description").is_some() {
        tally.award(0.5);
    }
    if signals.og("image").is_some() {
        tally.award(0.5);
    } else {
        tally.flag(Issue::error(
            "OG:Image missing — social shares are affected",
        ));
    }
    if signals.og("url").is_some() {
        tally.award(0.5);
    }
}

fn score_h1(tally: &mut Tally, count: usize) {
    match count {
        0 => tally.flag(Issue::error("H1 heading missing")),
        1 => tally.award(1.0),
        n => {
            tally.award(0.5);
            tally.flag(Issue::warning(format!(
                "multiple H1 headings present ({})",
                n
            )));
        }
    }
}

fn score_h2(tally: &mut Tally, count: usize) {
    if count > 0 {
        tally.award(1.0);
    } else {
        tally.flag(Issue::warning("no H2 heading — weak content structure"));
    }
}

fn score_robots(tally: &mut Tally, robots: Option<&str>) {
    if robots != Some(NOINDEX) {
        tally.award(1.0);
    }
}
