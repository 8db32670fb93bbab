use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::interval::AccountBalances;
use super::tooltip::{TooltipFragment, TooltipTarget};
use crate::formatting::traits::ChartContext;
use crate::services::tooltip_service::TooltipService;

/// Balance and budget of one currency within a bar group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarValue {
    pub currency: String,
    pub value: f64,
    pub budget: f64,
}

/// Display record for one interval of the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroupDatum {
    /// Formatted date of the interval (e.g. "Jan 2024")
    pub label: String,

    /// First day of the interval
    pub date: NaiveDate,

    /// One entry per displayed currency, in display order
    pub values: Vec<BarValue>,

    /// Raw per-account balances, moved over from the interval
    pub account_balances: AccountBalances,
}

/// One visible piece of a stacked bar: `[lower, upper]` in the units of
/// the stack's currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSegment {
    pub lower: f64,
    pub upper: f64,

    /// Index into `BarChart::bar_groups` of the interval this segment belongs to
    pub group: usize,
}

impl SeriesSegment {
    /// Height of the segment; always positive for emitted segments.
    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }
}

/// The layer of one account in a currency stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub account: String,
    pub segments: Vec<SeriesSegment>,
}

/// All account layers for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyStack {
    pub currency: String,

    /// Exactly one series per account, in `BarChart::accounts` order
    pub series: Vec<Series>,
}

/// Renderable model of the interval bar chart.
///
/// The core computes all the numbers — the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    /// Every account appearing in any interval, sorted
    pub accounts: Vec<String>,

    /// Currencies shown, in display order
    pub currencies: Vec<String>,

    /// One bar group per input interval, in input order
    pub bar_groups: Vec<BarGroupDatum>,

    /// One stack per displayed currency
    pub stacks: Vec<CurrencyStack>,

    /// True iff there is more than one account to stack
    pub has_stacked_data: bool,
}

impl BarChart {
    /// Resolve the bar group a rendered segment belongs to.
    pub fn bar_group_for(&self, segment: &SeriesSegment) -> Option<&BarGroupDatum> {
        self.bar_groups.get(segment.group)
    }

    /// The stack for `currency`, if that currency is displayed.
    pub fn stack(&self, currency: &str) -> Option<&CurrencyStack> {
        self.stacks.iter().find(|s| s.currency == currency)
    }

    /// Tooltip content for the bar group at `group`, for the whole group or
    /// for one account's layer. `None` if there is no such bar group.
    pub fn tooltip(
        &self,
        ctx: &dyn ChartContext,
        group: usize,
        target: &TooltipTarget,
    ) -> Option<Vec<TooltipFragment>> {
        let datum = self.bar_groups.get(group)?;
        Some(TooltipService::new().build(ctx, datum, target))
    }
}
