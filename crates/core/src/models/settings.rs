use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CoreError;

/// Length of the intervals the chart data was aggregated over.
/// Determines how interval dates are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalGranularity {
    Year,
    Quarter,
    #[default]
    Month,
    Week,
    Day,
}

impl IntervalGranularity {
    /// Label for an interval starting at `date`.
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            IntervalGranularity::Year => date.format("%Y").to_string(),
            IntervalGranularity::Quarter => {
                format!("{}Q{}", date.year(), date.month0() / 3 + 1)
            }
            IntervalGranularity::Month => date.format("%b %Y").to_string(),
            IntervalGranularity::Week => date.format("%YW%W").to_string(),
            IntervalGranularity::Day => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl std::fmt::Display for IntervalGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalGranularity::Year => write!(f, "year"),
            IntervalGranularity::Quarter => write!(f, "quarter"),
            IntervalGranularity::Month => write!(f, "month"),
            IntervalGranularity::Week => write!(f, "week"),
            IntervalGranularity::Day => write!(f, "day"),
        }
    }
}

/// User-configurable chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Currencies always shown first when present in the data (e.g. ["EUR", "USD"]).
    pub operating_currencies: Vec<String>,

    /// Interval length used for date labels
    pub interval: IntervalGranularity,

    /// Decimal places for currencies without an explicit precision
    pub default_precision: usize,

    /// Decimal places per currency (e.g. "JPY" → 0)
    pub currency_precision: HashMap<String, usize>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            operating_currencies: Vec::new(),
            interval: IntervalGranularity::default(),
            default_precision: 2,
            currency_precision: HashMap::new(),
        }
    }
}

impl ChartSettings {
    /// Load settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Configuration(e.to_string()))
    }

    /// Decimal places to use for `currency`.
    pub fn precision_for(&self, currency: &str) -> usize {
        self.currency_precision
            .get(currency)
            .copied()
            .unwrap_or(self.default_precision)
    }
}
