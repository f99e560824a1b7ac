//! Terminal output rendering for reports.
//!
//! Provides a human-readable summary of a run with visual cues for
//! failed features.

use crate::aggregator::report::{FeatureReport, Report, StatusCounts};
use colored::*;

/// Render a human-readable summary of a report for the terminal
pub fn render_summary(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_features(report));
    out.push_str(&render_totals(report));
    out.push_str(&render_status(report));

    out
}

fn render_header(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Test Run Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Generated: {}\n", report.generated_at));
    out.push_str("---------------------------------------------------\n");
    out
}

fn render_features(report: &Report) -> String {
    let mut out = String::new();
    for feature in &report.features {
        out.push_str(&render_feature_line(feature));
    }
    out
}

fn render_feature_line(feature: &FeatureReport) -> String {
    let symbol = if feature.is_failed { "❌" } else { "✅" };
    let name = feature.name.as_deref().unwrap_or("(unnamed feature)");
    format!(
        "  {} {}: {} ({})\n",
        symbol,
        name,
        format_counts(&feature.scenarios),
        format_duration(feature.time)
    )
}

fn render_totals(report: &Report) -> String {
    let suite = &report.suite;
    format!(
        "\nFeatures:  {} total, {} passed, {} failed\nScenarios: {}\nTime:      {}\n",
        suite.features(),
        suite.passed.to_string().green(),
        suite.failed.to_string().red(),
        format_counts(&suite.scenarios),
        format_duration(suite.total_time)
    )
}

fn render_status(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("---------------------------------------------------\n");
    let status_msg = if report.is_failed() {
        format!("❌ STATUS: FAILED ({} failing features)", report.suite.failed)
            .red()
            .bold()
    } else {
        "✅ STATUS: PASSED".green().bold()
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

/// `"3 passed, 1 failed"`, listing only non-zero buckets
pub fn format_counts(counts: &StatusCounts) -> String {
    let parts: Vec<String> = [
        (counts.passed, "passed"),
        (counts.failed, "failed"),
        (counts.skipped, "skipped"),
        (counts.pending, "pending"),
        (counts.notdefined, "undefined"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{} {}", count, label))
    .collect();

    if parts.is_empty() {
        "no scenarios".to_string()
    } else {
        parts.join(", ")
    }
}

/// Format nanoseconds for display
pub fn format_duration(nanos: f64) -> String {
    let millis = nanos / 1_000_000.0;
    if millis >= 1000.0 {
        format!("{:.2}s", millis / 1000.0)
    } else if millis > 0.0 && millis < 1.0 {
        format!("{:.3}ms", millis)
    } else {
        format!("{:.0}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::parse_results;

    #[test]
    fn test_format_counts() {
        let counts = StatusCounts {
            passed: 3,
            failed: 1,
            ..Default::default()
        };
        assert_eq!(format_counts(&counts), "3 passed, 1 failed");
        assert_eq!(format_counts(&StatusCounts::default()), "no scenarios");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0ms");
        assert_eq!(format_duration(400_000.0), "0.400ms");
        assert_eq!(format_duration(250_000_000.0), "250ms");
        assert_eq!(format_duration(2_500_000_000.0), "2.50s");
    }

    #[test]
    fn test_render_summary() {
        colored::control::set_override(false);

        let features = parse_results(
            r#"[{"name":"Search","elements":[{"name":"S","steps":[{"result":{"status":"failed"}}]}]}]"#,
        )
        .unwrap();

        let text = render_summary(&aggregate(&features));

        assert!(text.contains("Search: 1 failed"));
        assert!(text.contains("Features:  1 total, 0 passed, 1 failed"));
        assert!(text.contains("STATUS: FAILED (1 failing features)"));
    }
}
