//! Truncated HTML list of individual error records.
//!
//! Only the first few records are shown in detail; the rest are summarised in
//! a single line pointing at the export.

use crate::types::ErrorRecord;
use log::debug;

/// Number of errors shown in detail by [`format_error_list`].
pub const DEFAULT_DISPLAY_LIMIT: usize = 3;

/// Shown instead of a list when there is nothing to report.
pub const NO_ERRORS_HTML: &str =
    "<div style=\"text-align: center; color: #6b7280; padding: 20px;\">No errors found in the reconciliation.</div>";

const ITEM_SEPARATOR_STYLE: &str = "border-bottom: 1px solid #f3f4f6;";

/// Render the error list with the default display limit.
pub fn format_error_list(errors: &[ErrorRecord]) -> String {
    format_error_list_with_limit(errors, DEFAULT_DISPLAY_LIMIT)
}

/// Render up to `limit` errors in detail, in input order, followed by a
/// summary line when more remain.
pub fn format_error_list_with_limit(errors: &[ErrorRecord], limit: usize) -> String {
    if errors.is_empty() {
        return NO_ERRORS_HTML.to_string();
    }

    let shown = &errors[..errors.len().min(limit)];
    debug!("Formatting {} of {} errors", shown.len(), errors.len());

    let mut html = String::new();
    for (index, error) in shown.iter().enumerate() {
        let is_last = index + 1 == shown.len();
        html.push_str(&format_error_item(error, is_last));
    }

    if errors.len() > shown.len() {
        html.push_str(&format_remaining_summary(errors.len() - shown.len()));
    }

    html
}

/// One detailed error block; the last displayed item has no bottom border.
fn format_error_item(error: &ErrorRecord, is_last: bool) -> String {
    let border = if is_last { "" } else { ITEM_SEPARATOR_STYLE };

    let mut item = String::from("\n");
    item.push_str(&format!("            <div style=\"padding: 10px 0; {}\">\n", border));
    item.push_str(&format!("                <strong>{} ({})</strong><br>\n", error.employee_name, error.employee_id));
    item.push_str(&format!(
        "                <span style=\"color: #dc2626;\">{}: ${:.2} difference</span><br>\n",
        error.error_type, error.amount
    ));
    item.push_str(&format!(
        "                <span style=\"color: #6b7280; font-size: 0.875rem;\">{}</span>\n",
        error.description
    ));
    item.push_str("            </div>\n");
    item.push_str("        ");
    item
}

fn format_remaining_summary(remaining: usize) -> String {
    let mut summary = String::from("\n");
    summary.push_str(
        "            <div style=\"padding: 10px 0; text-align: center; color: #6b7280; font-style: italic;\">\n",
    );
    summary.push_str(&format!(
        "                ... and {} more errors (see export for complete list)\n",
        remaining
    ));
    summary.push_str("            </div>\n");
    summary.push_str("        ");
    summary
}
