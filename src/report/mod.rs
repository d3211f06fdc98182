//! Report generation module - turns reconciliation results into fragments.
//!
//! This module handles:
//! - Insight blocks from summary statistics
//! - The truncated HTML error list
//! - Per-type and per-priority error statistics
//! - Export of the complete error list to JSON and Markdown
//!
//! # Module Organization
//!
//! - `insights` - Insight model (RateTier, Insight) and HTML rendering
//! - `error_list` - Detailed error blocks plus the "more errors" summary
//! - `stats` - Grouping, counting and leading-number extraction
//! - `export` - JSON and Markdown export

mod error_list;
mod export;
mod insights;
mod stats;

// Re-export insight types and rendering
pub use insights::{Insight, RateTier, collect_insights, generate_insights};

// Re-export error list rendering
pub use error_list::{DEFAULT_DISPLAY_LIMIT, format_error_list, format_error_list_with_limit};

// Re-export stats functions
pub use stats::{ErrorTypeCount, count_error_types, high_priority_count, most_common_error_type, parse_leading_number};

// Re-export export functions
pub use export::{export_json_report, export_markdown_report, render_markdown_report};
