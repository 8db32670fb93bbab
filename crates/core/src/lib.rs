pub mod errors;
pub mod formatting;
pub mod models;
pub mod services;

use serde_json::Value;

use errors::CoreError;
use formatting::settings_context::SettingsContext;
use formatting::traits::ChartContext;
use models::{
    bar_chart::BarChart,
    chart::NamedChart,
    interval::Interval,
    settings::ChartSettings,
    tooltip::{TooltipFragment, TooltipTarget},
};
use services::{chart_service::ChartService, validation_service::ValidationService};

/// Main entry point for the interval chart core library.
/// Holds the chart settings and the services needed to build charts from
/// raw chart data.
#[must_use]
pub struct ChartEngine {
    context: SettingsContext,
    chart_service: ChartService,
    validation_service: ValidationService,
}

impl std::fmt::Debug for ChartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("settings", self.context.settings())
            .finish()
    }
}

impl ChartEngine {
    /// Create an engine with the given settings.
    pub fn new(settings: ChartSettings) -> Self {
        Self {
            context: SettingsContext::new(settings),
            chart_service: ChartService::new(),
            validation_service: ValidationService::new(),
        }
    }

    /// Create an engine from settings JSON; missing fields use defaults.
    pub fn from_settings_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::new(ChartSettings::from_json(json)?))
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        self.context.settings()
    }

    /// The formatting context used for labels, amounts and tooltips.
    #[must_use]
    pub fn context(&self) -> &dyn ChartContext {
        &self.context
    }

    // ── Bar Chart ───────────────────────────────────────────────────

    /// Validate raw interval data and build the bar chart.
    pub fn bar_chart(&self, data: &Value) -> Result<BarChart, CoreError> {
        self.chart_service.bar_chart_from_value(data, &self.context)
    }

    /// Same as `bar_chart`, from JSON text.
    pub fn bar_chart_from_json(&self, json: &str) -> Result<BarChart, CoreError> {
        let intervals = self.validation_service.decode_intervals_str(json)?;
        Ok(self.bar_chart_from_intervals(intervals))
    }

    /// Build the bar chart from intervals that are already typed.
    pub fn bar_chart_from_intervals(&self, intervals: Vec<Interval>) -> BarChart {
        self.chart_service.bar_chart(intervals, &self.context)
    }

    /// Tooltip content for one bar group of `chart`.
    /// Returns `None` if `group` is out of range.
    #[must_use]
    pub fn tooltip(
        &self,
        chart: &BarChart,
        group: usize,
        target: &TooltipTarget,
    ) -> Option<Vec<TooltipFragment>> {
        chart.tooltip(&self.context, group, target)
    }

    // ── Chart Envelopes ─────────────────────────────────────────────

    /// Parse a single `{type, label, data}` chart.
    pub fn named_chart(&self, value: &Value) -> Result<NamedChart, CoreError> {
        self.chart_service.parse_named_chart(value, &self.context)
    }

    /// Parse a list of `{type, label, data}` charts.
    pub fn named_charts(&self, value: &Value) -> Result<Vec<NamedChart>, CoreError> {
        self.chart_service.parse_named_charts(value, &self.context)
    }

    /// Parse a list of charts from JSON text.
    pub fn named_charts_from_json(&self, json: &str) -> Result<Vec<NamedChart>, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        self.named_charts(&value)
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new(ChartSettings::default())
    }
}
