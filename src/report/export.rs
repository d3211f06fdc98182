//! Report export functions for JSON and Markdown formats.
//!
//! The HTML error list only shows the first few records; these exports hold
//! the complete list the summary line points the viewer to.

use super::stats::{count_error_types, high_priority_count};
use crate::types::ReconciliationSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the full reconciliation result as JSON.
///
/// Creates a JSON report including summary statistics, per-type error
/// counts, and every error record.
///
/// # Arguments
/// * `summary` - The reconciliation result
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(summary: &ReconciliationSummary, output_path: &Path) -> std::io::Result<()> {
    use serde_json::json;

    let report = json!({
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "group_name": summary.group_name,
        "period": summary.period,
        "total_employees": summary.total_employees,
        "errors_found": summary.errors_found,
        "error_rate": summary.error_rate,
        "time_saved": summary.time_saved,
        "files_processed": summary.files_processed,
        "summary": {
            "high_priority": high_priority_count(&summary.errors),
            "error_types": count_error_types(&summary.errors),
        },
        "errors": summary.errors,
    });

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}

/// Export the full error list as a Markdown table.
///
/// # Arguments
/// * `summary` - The reconciliation result
/// * `output_path` - Path to write the Markdown file
pub fn export_markdown_report(summary: &ReconciliationSummary, output_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(render_markdown_report(summary).as_bytes())?;
    Ok(())
}

/// Render the Markdown export as a string.
pub fn render_markdown_report(summary: &ReconciliationSummary) -> String {
    let mut out = String::new();

    out.push_str("# Reconciliation Error Report\n\n");
    if let Some(ref group) = summary.group_name {
        out.push_str(&format!("**Group**: {}\n", group));
    }
    if let Some(ref period) = summary.period {
        out.push_str(&format!("**Period**: {}\n", period));
    }
    if summary.group_name.is_some() || summary.period.is_some() {
        out.push('\n');
    }
    out.push_str(&format!("_Generated: {}_\n\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));

    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Employees**: {}\n", summary.total_employees));
    out.push_str(&format!("- **Errors found**: {}\n", summary.errors_found));
    out.push_str(&format!("- **Error rate**: {}%\n", summary.error_rate));
    out.push_str(&format!("- **High priority**: {}\n", high_priority_count(&summary.errors)));
    out.push_str(&format!("- **Files processed**: {}\n", summary.files_processed));
    out.push_str(&format!("- **Time saved**: {}\n\n", summary.time_saved));

    let by_type = count_error_types(&summary.errors);
    if !by_type.is_empty() {
        out.push_str("## Errors by Type\n\n");
        out.push_str("| Error Type | Count |\n|---|---|\n");
        for entry in &by_type {
            out.push_str(&format!("| {} | {} |\n", markdown_cell(&entry.error_type), entry.count));
        }
        out.push('\n');
    }

    out.push_str("## All Errors\n\n");
    if summary.errors.is_empty() {
        out.push_str("No errors found in the reconciliation.\n");
        return out;
    }

    out.push_str("| # | Employee | ID | Error Type | Priority | Amount | Description |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for (i, error) in summary.errors.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | ${:.2} | {} |\n",
            i + 1,
            markdown_cell(&error.employee_name),
            markdown_cell(&error.employee_id),
            markdown_cell(&error.error_type),
            markdown_cell(&error.priority),
            error.amount,
            markdown_cell(&error.description),
        ));
    }

    out
}

/// Keep a value inside one Markdown table cell
fn markdown_cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}
