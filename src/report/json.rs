//! JSON report output.

use super::Report;

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error only if serialization fails, which does not happen for
/// reports built by this crate.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
