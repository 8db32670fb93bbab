use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point of a line chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Balance history of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub currency: String,
    pub values: Vec<LinePoint>,
}

/// Balances-over-time chart, one series per currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub series: Vec<LineSeries>,
}

impl LineChart {
    pub fn series_for(&self, currency: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.currency == currency)
    }
}
