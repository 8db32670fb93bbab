use serde::{Deserialize, Serialize};

use super::bar_chart::BarChart;
use super::line_chart::LineChart;

/// Every chart kind the core can build.
///
/// The string tag of the JSON envelope ("barchart", "balances") is only
/// looked at while parsing; everything downstream matches on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
}

impl Chart {
    pub fn as_bar(&self) -> Option<&BarChart> {
        match self {
            Chart::Bar(chart) => Some(chart),
            Chart::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineChart> {
        match self {
            Chart::Line(chart) => Some(chart),
            Chart::Bar(_) => None,
        }
    }
}

/// A chart together with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedChart {
    pub label: String,
    pub chart: Chart,
}
