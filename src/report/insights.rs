//! Insight generation from summary statistics.
//!
//! Each insight is one `<div class="insight-item">` block. Blocks appear in a
//! fixed order: error-rate tier, primary issue, urgent attention, process
//! efficiency. Only the error-rate tier is unconditional.
//!
//! Field values are interpolated verbatim; nothing is HTML-escaped.

use super::stats::{high_priority_count, most_common_error_type, parse_leading_number};
use crate::types::ReconciliationSummary;
use log::debug;

/// Error rate (percent) above which the run is flagged as high.
pub const HIGH_ERROR_RATE: f64 = 15.0;

/// Error rate (percent) above which the run is flagged as moderate.
pub const MODERATE_ERROR_RATE: f64 = 5.0;

/// Severity tier for the error-rate insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTier {
    High,
    Moderate,
    Low,
}

impl RateTier {
    /// Classify an error rate percentage.
    pub fn classify(error_rate: f64) -> Self {
        if error_rate > HIGH_ERROR_RATE {
            RateTier::High
        } else if error_rate > MODERATE_ERROR_RATE {
            RateTier::Moderate
        } else {
            RateTier::Low
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RateTier::High => "High Error Rate",
            RateTier::Moderate => "Moderate Error Rate",
            RateTier::Low => "Low Error Rate",
        }
    }

    fn verdict(&self) -> &'static str {
        match self {
            RateTier::High => "indicates significant discrepancies between payroll and carrier data",
            RateTier::Moderate => "shows some discrepancies that need attention",
            RateTier::Low => "indicates good data alignment",
        }
    }
}

/// One insight block - type-safe rendering model.
#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    /// Overall error rate with its tier
    ErrorRate { tier: RateTier, error_rate: f64 },

    /// Most frequent error type
    PrimaryIssue { error_type: String, count: usize },

    /// Errors with priority "High"
    UrgentAttention { count: usize },

    /// Manual effort saved, as reported upstream
    ProcessEfficiency { time_saved: String },
}

impl Insight {
    /// Bold label shown before the sentence.
    pub fn label(&self) -> &'static str {
        match self {
            Insight::ErrorRate { tier, .. } => tier.label(),
            Insight::PrimaryIssue { .. } => "Primary Issue",
            Insight::UrgentAttention { .. } => "Urgent Attention",
            Insight::ProcessEfficiency { .. } => "Process Efficiency",
        }
    }

    /// Sentence following the label.
    pub fn sentence(&self) -> String {
        match self {
            Insight::ErrorRate { tier, error_rate } => {
                format!("{}% error rate {}", error_rate, tier.verdict())
            }
            Insight::PrimaryIssue { error_type, count } => {
                format!("{} errors are most common ({} occurrences)", error_type, count)
            }
            Insight::UrgentAttention { count } => {
                format!("{} high-priority errors require immediate review", count)
            }
            Insight::ProcessEfficiency { time_saved } => {
                format!("Automated reconciliation saved {} of manual work", time_saved)
            }
        }
    }

    /// Render as an HTML block.
    pub fn to_html(&self) -> String {
        format!("<div class=\"insight-item\"><strong>{}:</strong> {}</div>", self.label(), self.sentence())
    }
}

/// Build the insight list for a summary, in display order.
pub fn collect_insights(summary: &ReconciliationSummary) -> Vec<Insight> {
    // -0 prints as "-0"
    let error_rate = if summary.error_rate == 0.0 { 0.0 } else { summary.error_rate };
    let mut insights = vec![Insight::ErrorRate { tier: RateTier::classify(error_rate), error_rate }];

    // An empty type names nothing, so it never becomes the primary issue
    if let Some(top) = most_common_error_type(&summary.errors)
        && !top.error_type.is_empty()
    {
        insights.push(Insight::PrimaryIssue { error_type: top.error_type, count: top.count });
    }

    let urgent = high_priority_count(&summary.errors);
    if urgent > 0 {
        insights.push(Insight::UrgentAttention { count: urgent });
    }

    let hours = parse_leading_number(&summary.time_saved);
    if hours.is_some_and(|h| h > 0.0) {
        insights.push(Insight::ProcessEfficiency { time_saved: summary.time_saved.clone() });
    }

    debug!("Collected {} insights (error rate {}%)", insights.len(), summary.error_rate);
    insights
}

/// Render all insight blocks for a summary as one HTML string.
///
/// Never fails; blocks are concatenated without separators.
pub fn generate_insights(summary: &ReconciliationSummary) -> String {
    collect_insights(summary).iter().map(Insight::to_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorRecord;

    fn summary_with_rate(error_rate: f64) -> ReconciliationSummary {
        ReconciliationSummary { error_rate, ..Default::default() }
    }

    fn error(error_type: &str, priority: &str) -> ErrorRecord {
        ErrorRecord { error_type: error_type.to_string(), priority: priority.to_string(), ..Default::default() }
    }

    fn count_tier_blocks(html: &str) -> usize {
        ["High Error Rate", "Moderate Error Rate", "Low Error Rate"].iter().map(|l| html.matches(l).count()).sum()
    }

    #[test]
    fn test_rate_tier_boundaries() {
        assert_eq!(RateTier::classify(0.0), RateTier::Low);
        assert_eq!(RateTier::classify(5.0), RateTier::Low);
        assert_eq!(RateTier::classify(5.01), RateTier::Moderate);
        assert_eq!(RateTier::classify(15.0), RateTier::Moderate);
        assert_eq!(RateTier::classify(15.5), RateTier::High);
        assert_eq!(RateTier::classify(800.0), RateTier::High);
    }

    #[test]
    fn test_exactly_one_tier_block() {
        for rate in [0.0, 3.0, 5.0, 7.5, 15.0, 16.0, 120.0] {
            let html = generate_insights(&summary_with_rate(rate));
            assert_eq!(count_tier_blocks(&html), 1, "rate {}", rate);
        }
    }

    #[test]
    fn test_default_summary_renders_low_rate_only() {
        let html = generate_insights(&ReconciliationSummary::default());
        assert_eq!(
            html,
            "<div class=\"insight-item\"><strong>Low Error Rate:</strong> 0% error rate indicates good data alignment</div>"
        );
    }

    #[test]
    fn test_negative_zero_rate_renders_as_zero() {
        let html = generate_insights(&summary_with_rate(-0.0));
        assert!(html.contains("<strong>Low Error Rate:</strong> 0% error rate"));
        assert!(!html.contains("-0%"));
    }

    #[test]
    fn test_high_rate_sentence() {
        let html = generate_insights(&summary_with_rate(20.0));
        assert_eq!(
            html,
            "<div class=\"insight-item\"><strong>High Error Rate:</strong> 20% error rate indicates significant discrepancies between payroll and carrier data</div>"
        );
    }

    #[test]
    fn test_moderate_rate_keeps_fraction() {
        let html = generate_insights(&summary_with_rate(7.5));
        assert!(html.contains("<strong>Moderate Error Rate:</strong> 7.5% error rate shows some discrepancies"));
    }

    #[test]
    fn test_no_primary_issue_without_errors() {
        let summary = ReconciliationSummary { error_rate: 50.0, time_saved: "2 hrs".to_string(), ..Default::default() };
        assert!(!generate_insights(&summary).contains("Primary Issue"));
    }

    #[test]
    fn test_primary_issue_reports_most_common_type() {
        let summary = ReconciliationSummary {
            errors: vec![error("A", "Low"), error("A", "Low"), error("B", "Low")],
            ..Default::default()
        };
        let html = generate_insights(&summary);
        assert!(html.contains(
            "<div class=\"insight-item\"><strong>Primary Issue:</strong> A errors are most common (2 occurrences)</div>"
        ));
    }

    #[test]
    fn test_primary_issue_tie_uses_first_seen_type() {
        let summary = ReconciliationSummary {
            errors: vec![error("Missing Coverage", ""), error("Premium Mismatch", "")],
            ..Default::default()
        };
        assert!(generate_insights(&summary).contains("Missing Coverage errors are most common (1 occurrences)"));
    }

    #[test]
    fn test_primary_issue_skipped_for_empty_type() {
        let summary = ReconciliationSummary { errors: vec![error("", "")], ..Default::default() };
        assert!(!generate_insights(&summary).contains("Primary Issue"));
    }

    #[test]
    fn test_urgent_attention() {
        let none = ReconciliationSummary { errors: vec![error("A", "Medium")], ..Default::default() };
        assert!(!generate_insights(&none).contains("Urgent Attention"));

        let two = ReconciliationSummary {
            errors: vec![error("A", "High"), error("B", "Low"), error("C", "High")],
            ..Default::default()
        };
        assert!(generate_insights(&two).contains(
            "<strong>Urgent Attention:</strong> 2 high-priority errors require immediate review</div>"
        ));
    }

    #[test]
    fn test_process_efficiency() {
        let idle = ReconciliationSummary::default();
        assert!(!generate_insights(&idle).contains("Process Efficiency"));

        let busy = ReconciliationSummary { time_saved: "2.5 hrs".to_string(), ..Default::default() };
        assert!(generate_insights(&busy).contains(
            "<strong>Process Efficiency:</strong> Automated reconciliation saved 2.5 hrs of manual work</div>"
        ));

        let garbled = ReconciliationSummary { time_saved: "hrs 3".to_string(), ..Default::default() };
        assert!(!generate_insights(&garbled).contains("Process Efficiency"));
    }

    #[test]
    fn test_blocks_in_fixed_order_without_separators() {
        let summary = ReconciliationSummary {
            error_rate: 10.0,
            errors: vec![error("A", "High")],
            time_saved: "3.75 hrs".to_string(),
            ..Default::default()
        };
        let insights = collect_insights(&summary);
        let labels: Vec<&str> = insights.iter().map(Insight::label).collect();
        assert_eq!(labels, vec!["Moderate Error Rate", "Primary Issue", "Urgent Attention", "Process Efficiency"]);

        let html = generate_insights(&summary);
        assert_eq!(html.matches("</div><div").count(), 3);
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let summary = ReconciliationSummary { errors: vec![error("<b>Plan</b>", "")], ..Default::default() };
        assert!(generate_insights(&summary).contains("<b>Plan</b> errors are most common"));
    }
}
