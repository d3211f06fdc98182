/// Core data structures for reconciliation results
///
/// This module defines the records handed to us by the reconciliation engine.
/// Deserialization is deliberately forgiving: a field with the wrong shape
/// falls back to its default instead of rejecting the whole document.
use serde::{Deserialize, Serialize};

/// Default value of `time_saved` when the engine did not report one
pub const DEFAULT_TIME_SAVED: &str = "0 hrs";

/// Priority label that marks an error as urgent
pub const HIGH_PRIORITY: &str = "High";

/// Summary statistics for one reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_employees: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub errors_found: u64,

    /// Percentage of employees with at least one discrepancy
    #[serde(default, deserialize_with = "lenient::number")]
    pub error_rate: f64,

    #[serde(default, deserialize_with = "lenient::records")]
    pub errors: Vec<ErrorRecord>,

    /// Free-form duration such as "3.75 hrs"
    #[serde(default = "default_time_saved", deserialize_with = "lenient::time_saved")]
    pub time_saved: String,

    /// Number of source files (benadmin, carrier, payroll) the engine read
    #[serde(default, deserialize_with = "lenient::count")]
    pub files_processed: u64,

    /// Employer group the run was for, e.g. "Demo Group"
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub group_name: Option<String>,

    /// Billing period, e.g. "2025-07"
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub period: Option<String>,
}

impl Default for ReconciliationSummary {
    fn default() -> Self {
        Self {
            total_employees: 0,
            errors_found: 0,
            error_rate: 0.0,
            errors: Vec::new(),
            time_saved: default_time_saved(),
            files_processed: 0,
            group_name: None,
            period: None,
        }
    }
}

impl ReconciliationSummary {
    /// Parse a summary from JSON text
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse reconciliation JSON: {}", e))
    }
}

fn default_time_saved() -> String {
    DEFAULT_TIME_SAVED.to_string()
}

/// One discrepancy between payroll and carrier data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub error_type: String, // "Premium Mismatch"

    #[serde(default, deserialize_with = "lenient::text")]
    pub priority: String, // "High" | "Medium" | "Low"

    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub employee_id: String, // "EMP1004"

    /// Currency difference between the two sources
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: f64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

impl ErrorRecord {
    /// Check if this error is flagged for immediate review (exact, case-sensitive match)
    pub fn is_high_priority(&self) -> bool {
        self.priority == HIGH_PRIORITY
    }
}

/// Shape-tolerant field deserializers
mod lenient {
    use super::{ErrorRecord, default_time_saved};
    use log::warn;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Interpret a JSON value as a number, defaulting to 0
    fn to_number(value: &Value) -> f64 {
        match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return 0.0;
                }
                match trimmed.parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        warn!("Non-numeric value {:?} treated as 0", s);
                        0.0
                    }
                }
            }
            Value::Null => 0.0,
            other => {
                warn!("Unexpected value {} where a number was expected, treated as 0", other);
                0.0
            }
        }
    }

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(to_number(&value))
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if let Some(n) = value.as_u64() {
            return Ok(n);
        }
        let n = to_number(&value);
        Ok(if n > 0.0 { n.trunc() as u64 } else { 0 })
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                warn!("Unexpected value {} where text was expected, treated as empty", other);
                String::new()
            }
        })
    }

    pub fn time_saved<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => match n.as_f64() {
                Some(v) if v != 0.0 => v.to_string(),
                _ => default_time_saved(),
            },
            _ => default_time_saved(),
        })
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = text(deserializer)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    /// Keep every object entry; anything else in the list is dropped
    pub fn records<'de, D>(deserializer: D) -> Result<Vec<ErrorRecord>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = match Value::deserialize(deserializer)? {
            Value::Array(entries) => entries,
            Value::Null => return Ok(Vec::new()),
            other => {
                warn!("Unexpected value {} where an error list was expected, treated as empty", other);
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                warn!("Skipping error entry #{} ({}): not an object", index, entry);
                continue;
            }
            match serde_json::from_value::<ErrorRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping error entry #{}: {}", index, e),
            }
        }
        Ok(records)
    }
}
