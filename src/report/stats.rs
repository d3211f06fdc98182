//! Statistics derived from reconciliation errors.
//!
//! This module handles aggregating error records into the counts the
//! insight blocks and exports are built from.

use crate::types::ErrorRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Number of errors sharing one `error_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTypeCount {
    pub error_type: String,
    pub count: usize,
}

/// Count errors per type.
///
/// # Returns
/// One entry per distinct `error_type`, ordered by first appearance in `errors`.
pub fn count_error_types(errors: &[ErrorRecord]) -> Vec<ErrorTypeCount> {
    let mut counts: Vec<ErrorTypeCount> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for error in errors {
        match position.get(error.error_type.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(error.error_type.as_str(), counts.len());
                counts.push(ErrorTypeCount { error_type: error.error_type.clone(), count: 1 });
            }
        }
    }

    counts
}

/// Find the most common error type.
///
/// Ties go to the type that appears first in `errors`. Returns None for an
/// empty list.
pub fn most_common_error_type(errors: &[ErrorRecord]) -> Option<ErrorTypeCount> {
    let mut best: Option<ErrorTypeCount> = None;

    for entry in count_error_types(errors) {
        // Strictly greater keeps the earlier type on ties
        if best.as_ref().is_none_or(|b| entry.count > b.count) {
            best = Some(entry);
        }
    }

    best
}

/// Count errors whose priority is exactly "High".
pub fn high_priority_count(errors: &[ErrorRecord]) -> usize {
    errors.iter().filter(|e| e.is_high_priority()).count()
}

/// Extract the leading number from free-form text such as "3.5 hrs".
///
/// Mirrors the usual `parseFloat` reading: leading whitespace is skipped, an
/// optional sign is accepted, then `Infinity` or the longest
/// `digits[.digits][e[+-]digits]` prefix. Returns None when no number starts
/// the text.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
