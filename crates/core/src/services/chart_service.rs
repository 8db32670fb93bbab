use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::CoreError;
use crate::formatting::traits::ChartContext;
use crate::models::bar_chart::BarChart;
use crate::models::chart::{Chart, NamedChart};
use crate::models::interval::{BalancePoint, Interval};
use crate::models::line_chart::{LineChart, LinePoint, LineSeries};
use crate::services::bar_group_service::BarGroupService;
use crate::services::currency_service::CurrencyService;
use crate::services::stack_service::StackService;
use crate::services::validation_service::ValidationService;

/// Envelope tag of the interval bar chart.
pub const BAR_CHART_TYPE: &str = "barchart";

/// Envelope tag of the balances line chart.
pub const BALANCES_CHART_TYPE: &str = "balances";

/// Raw `{type, label, data}` chart envelope.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(rename = "type")]
    kind: String,
    label: String,
    data: Value,
}

/// Generates chart models from validated chart data.
///
/// Bar chart pipeline:
/// 1. Select the currencies to display
/// 2. Build one bar group per interval
/// 3. Collect the sorted account set
/// 4. Stack account balances per currency
pub struct ChartService {
    validation_service: ValidationService,
    currency_service: CurrencyService,
    bar_group_service: BarGroupService,
    stack_service: StackService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            validation_service: ValidationService::new(),
            currency_service: CurrencyService::new(),
            bar_group_service: BarGroupService::new(),
            stack_service: StackService::new(),
        }
    }

    /// Build the bar chart for already validated intervals.
    pub fn bar_chart(&self, intervals: Vec<Interval>, ctx: &dyn ChartContext) -> BarChart {
        let currencies = self
            .currency_service
            .select_currencies(&intervals, ctx.operating_currencies());
        debug!(?currencies, intervals = intervals.len(), "selected bar chart currencies");

        let bar_groups = self
            .bar_group_service
            .build_bar_groups(intervals, &currencies, ctx);
        let accounts = self.stack_service.collect_accounts(&bar_groups);
        let stacks = self
            .stack_service
            .build_stacks(&bar_groups, &accounts, &currencies);
        debug!(accounts = accounts.len(), stacks = stacks.len(), "stacked bar chart accounts");

        BarChart {
            has_stacked_data: accounts.len() > 1,
            accounts,
            currencies,
            bar_groups,
            stacks,
        }
    }

    /// Validate raw interval data and build the bar chart.
    /// Validation failures abort before anything is built.
    pub fn bar_chart_from_value(
        &self,
        value: &Value,
        ctx: &dyn ChartContext,
    ) -> Result<BarChart, CoreError> {
        let intervals = self.validation_service.decode_intervals(value)?;
        Ok(self.bar_chart(intervals, ctx))
    }

    /// Group balance points by currency, keeping first-seen currency order
    /// and input order within each series.
    pub fn line_chart(&self, points: Vec<BalancePoint>) -> LineChart {
        let mut series: Vec<LineSeries> = Vec::new();
        for point in points {
            for (currency, value) in point.balance {
                let line_point = LinePoint { date: point.date, value };
                match series.iter_mut().find(|s| s.currency == currency) {
                    Some(existing) => existing.values.push(line_point),
                    None => series.push(LineSeries {
                        currency,
                        values: vec![line_point],
                    }),
                }
            }
        }
        LineChart { series }
    }

    /// Parse one `{type, label, data}` envelope into a chart.
    pub fn parse_named_chart(
        &self,
        value: &Value,
        ctx: &dyn ChartContext,
    ) -> Result<NamedChart, CoreError> {
        let envelope = ChartEnvelope::deserialize(value)
            .map_err(|e| CoreError::ValidationError(format!("invalid chart envelope: {e}")))?;

        let chart = match envelope.kind.as_str() {
            BAR_CHART_TYPE => Chart::Bar(self.bar_chart_from_value(&envelope.data, ctx)?),
            BALANCES_CHART_TYPE => {
                let points = self
                    .validation_service
                    .decode_balance_points(&envelope.data)?;
                Chart::Line(self.line_chart(points))
            }
            other => return Err(CoreError::UnknownChartType(other.to_string())),
        };

        Ok(NamedChart {
            label: envelope.label,
            chart,
        })
    }

    /// Parse a list of chart envelopes. The first invalid chart fails the
    /// whole list.
    pub fn parse_named_charts(
        &self,
        value: &Value,
        ctx: &dyn ChartContext,
    ) -> Result<Vec<NamedChart>, CoreError> {
        let envelopes = value.as_array().ok_or_else(|| {
            CoreError::ValidationError("expected an array of charts".to_string())
        })?;
        envelopes
            .iter()
            .map(|envelope| self.parse_named_chart(envelope, ctx))
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
