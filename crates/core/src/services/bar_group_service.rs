use crate::formatting::traits::ChartContext;
use crate::models::bar_chart::{BarGroupDatum, BarValue};
use crate::models::interval::Interval;

/// Turns intervals into bar groups, one per interval.
pub struct BarGroupService;

impl BarGroupService {
    pub fn new() -> Self {
        Self
    }

    /// Build one bar group per interval, keeping input order.
    ///
    /// Each group carries a `(value, budget)` pair for every currency in
    /// `currencies`; amounts missing from the interval are 0. The
    /// interval's account balances are moved into the group unchanged.
    pub fn build_bar_groups(
        &self,
        intervals: Vec<Interval>,
        currencies: &[String],
        ctx: &dyn ChartContext,
    ) -> Vec<BarGroupDatum> {
        intervals
            .into_iter()
            .map(|interval| {
                let values = currencies
                    .iter()
                    .map(|currency| BarValue {
                        currency: currency.clone(),
                        value: interval.balance_in(currency),
                        budget: interval.budget_in(currency),
                    })
                    .collect();

                BarGroupDatum {
                    label: ctx.date_label(interval.date),
                    date: interval.date,
                    values,
                    account_balances: interval.account_balances,
                }
            })
            .collect()
    }
}

impl Default for BarGroupService {
    fn default() -> Self {
        Self::new()
    }
}
