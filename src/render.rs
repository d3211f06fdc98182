/// Fragment assembly for one run
///
/// Plays the role of the page-rendering caller: invokes the insight generator
/// and the error list formatter for the requested sections and combines
/// their output.
use crate::config::RenderConfig;
use crate::report;
use crate::types::ReconciliationSummary;
use log::debug;
use serde::Serialize;

/// Rendered fragments; a section that was not requested is None
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_list: Option<String>,
}

impl Fragments {
    /// Concatenate the fragments, insights first, without separators
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(ref insights) = self.insights {
            html.push_str(insights);
        }
        if let Some(ref error_list) = self.error_list {
            html.push_str(error_list);
        }
        html
    }

    /// Serialize as a JSON object keyed by section
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize fragments: {}", e))
    }
}

/// Render the sections selected by `config`
pub fn render_fragments(summary: &ReconciliationSummary, config: &RenderConfig) -> Fragments {
    let insights = config.section.includes_insights().then(|| report::generate_insights(summary));
    let error_list = config
        .section
        .includes_errors()
        .then(|| report::format_error_list_with_limit(&summary.errors, config.max_errors));

    debug!(
        "Rendered {:?} section(s) for {} errors (display limit {})",
        config.section,
        summary.errors.len(),
        config.max_errors
    );

    Fragments { insights, error_list }
}

/// Produce the final output text for a run
pub fn render_output(summary: &ReconciliationSummary, config: &RenderConfig) -> Result<String, String> {
    let fragments = render_fragments(summary, config);
    if config.json { fragments.to_json() } else { Ok(fragments.to_html()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Section;
    use crate::types::ErrorRecord;

    fn config(section: Section) -> RenderConfig {
        RenderConfig {
            input: None,
            output: None,
            section,
            max_errors: 3,
            json: false,
            export_json: None,
            export_markdown: None,
        }
    }

    fn summary() -> ReconciliationSummary {
        ReconciliationSummary {
            error_rate: 20.0,
            errors: vec![ErrorRecord {
                error_type: "Plan Code Error".to_string(),
                priority: "High".to_string(),
                employee_name: "Linda Lee".to_string(),
                employee_id: "EMP1007".to_string(),
                amount: 45.0,
                description: "Plan code mismatch".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_all_sections_concatenate_insights_first() {
        let s = summary();
        let html = render_fragments(&s, &config(Section::All)).to_html();
        let expected = format!("{}{}", report::generate_insights(&s), report::format_error_list(&s.errors));
        assert_eq!(html, expected);
    }

    #[test]
    fn test_single_section() {
        let s = summary();
        let insights_only = render_fragments(&s, &config(Section::Insights));
        assert!(insights_only.error_list.is_none());
        assert!(insights_only.to_html().starts_with("<div class=\"insight-item\">"));

        let errors_only = render_fragments(&s, &config(Section::Errors));
        assert!(errors_only.insights.is_none());
        assert!(errors_only.to_html().contains("Linda Lee (EMP1007)"));
    }

    #[test]
    fn test_json_output_keys() {
        let s = summary();
        let cfg = RenderConfig { json: true, ..config(Section::Errors) };
        let out = render_output(&s, &cfg).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("insights").is_none());
        assert!(value["error_list"].as_str().unwrap().contains("$45.00 difference"));
    }
}
