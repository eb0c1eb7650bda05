// 🖨️ Reporter - render the aggregation result

use crate::aggregate::RevenueSummary;
use anyhow::{Context, Result};

/// Plain-text rendering: one {country, revenue} line per entity, then the
/// total. A poisoned total renders as NaN rather than hiding the defect.
pub fn render_summary(summary: &RevenueSummary) -> String {
    let mut out = String::new();

    if summary.by_country.is_empty() {
        out.push_str("(no orders)\n");
    } else {
        for entry in &summary.by_country {
            out.push_str(&format!("{}: {:.2}\n", entry.country, entry.revenue));
        }
    }

    out.push_str(&format!("Total revenue: {:.2}\n", summary.total_revenue));
    out
}

/// Pretty JSON rendering of the full summary
pub fn summary_json(summary: &RevenueSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize revenue summary")
}

// ============================================================================
// TESTS
// ============================================================================
