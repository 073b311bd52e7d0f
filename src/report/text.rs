//! Human-readable report output.

use super::Report;
use crate::config::{DESCRIPTION_PREVIEW_CHARS, REPORT_RULE_WIDTH};
use crate::models::Severity;
use strum::IntoEnumIterator;

const PASS: &str = "✅";
const FAIL: &str = "❌";
const WARN: &str = "⚠️ ";

// Missing required signals fail, missing recommended ones warn
fn required(ok: bool) -> &'static str {
    if ok {
        PASS
    } else {
        FAIL
    }
}

fn recommended(ok: bool) -> &'static str {
    if ok {
        PASS
    } else {
        WARN
    }
}

// "3 error, 1 warning"; severities with no issues are left out
fn tally(report: &Report) -> String {
    Severity::iter()
        .filter_map(|severity| {
            let count = report
                .issues()
                .iter()
                .filter(|issue| issue.severity == severity)
                .count();
            (count > 0).then(|| format!("{} {}", count, severity))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn preview(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Renders the report as a multi-line summary for the terminal.
///
/// Lists the URL, one line per signal with a pass/fail marker, the score out
/// of 10 and the issues in the order they were raised.
pub fn render_text(report: &Report) -> String {
    let signals = report.signals();
    let title = signals.title.as_deref().filter(|t| !t.is_empty());
    let description = signals.description.as_deref().filter(|d| !d.is_empty());
    let canonical = signals.canonical.as_deref().filter(|c| !c.is_empty());
    let og_title = signals.og("title");
    let og_image = signals.og("image");
    let h1 = signals.heading_counts.h1();
    let h2 = signals.heading_counts.h2();
    let noindex = signals.robots.as_deref() == Some("noindex");

    let mut lines = vec![
        String::new(),
        format!("URL: {}", report.url()),
        "━".repeat(REPORT_RULE_WIDTH),
        format!(
            "{} Title: {}",
            required(title.is_some()),
            title.map_or_else(
                || "Missing".to_string(),
                |t| format!("\"{}\" ({} characters)", t, t.chars().count())
            )
        ),
        format!(
            "{} Description: {}",
            recommended(description.is_some()),
            description.map_or_else(
                || "Missing".to_string(),
                |d| format!("\"{}\" ({} characters)", preview(d), d.chars().count())
            )
        ),
        format!(
            "{} Canonical: {}",
            recommended(canonical.is_some()),
            canonical.unwrap_or("Not defined")
        ),
        format!(
            "{} OG:Title: {}",
            recommended(og_title.is_some()),
            og_title.unwrap_or("Missing")
        ),
        format!(
            "{} OG:Image: {}",
            required(og_image.is_some()),
            if og_image.is_some() { "Present" } else { "Missing" }
        ),
        format!(
            "{} H1: {}{}",
            required(h1 == 1),
            h1,
            if h1 == 1 { " (ideal)" } else { "" }
        ),
        format!("{} H2: {}", recommended(h2 > 0), h2),
        format!(
            "{} Robots: {}",
            required(!noindex),
            signals.robots.as_deref().unwrap_or("Not set")
        ),
        String::new(),
        format!("Score: {}/10", report.score()),
    ];

    if !report.issues().is_empty() {
        lines.push(String::new());
        lines.push(format!("Issues ({}):", tally(report)));
        for issue in report.issues() {
            let marker = match issue.severity {
                Severity::Error => FAIL,
                Severity::Warning => WARN,
            };
            lines.push(format!("  {} {}", marker, issue.message));
        }
    }

    lines.join("\n")
}
