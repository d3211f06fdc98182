//! Render payroll/carrier reconciliation results as HTML fragments.
//!
//! The two entry points are [`report::generate_insights`], which turns
//! summary statistics into insight blocks, and [`report::format_error_list`],
//! which renders the first few error records plus a "more errors" line.
//! Both are pure and never fail; field values are interpolated verbatim.

pub mod cli;
pub mod config;
pub mod render;
pub mod report;
pub mod types;

pub use report::{format_error_list, generate_insights};
pub use types::{ErrorRecord, ReconciliationSummary};
