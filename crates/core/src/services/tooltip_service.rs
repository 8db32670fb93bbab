use crate::formatting::traits::ChartContext;
use crate::models::bar_chart::BarGroupDatum;
use crate::models::interval::account_amount;
use crate::models::line_chart::LinePoint;
use crate::models::tooltip::{TooltipFragment, TooltipTarget};

/// Assembles tooltip content; rendering the fragments is left to the caller.
pub struct TooltipService;

impl TooltipService {
    pub fn new() -> Self {
        Self
    }

    /// Tooltip for a bar group, either for the whole group or one account.
    pub fn build(
        &self,
        ctx: &dyn ChartContext,
        datum: &BarGroupDatum,
        target: &TooltipTarget,
    ) -> Vec<TooltipFragment> {
        match target {
            TooltipTarget::Aggregate => self.aggregate(ctx, datum),
            TooltipTarget::Account(account) => self.account(ctx, datum, account),
        }
    }

    /// One line per currency: `"<value> / <budget>"`, or just `"<value>"`
    /// when there is no budget. Ends with the emphasized interval label.
    pub fn aggregate(&self, ctx: &dyn ChartContext, datum: &BarGroupDatum) -> Vec<TooltipFragment> {
        let mut fragments = Vec::with_capacity(datum.values.len() * 2 + 1);
        for value in &datum.values {
            let text = if value.budget != 0.0 {
                format!(
                    "{} / {}",
                    ctx.amount(value.value, &value.currency),
                    ctx.amount(value.budget, &value.currency)
                )
            } else {
                ctx.amount(value.value, &value.currency)
            };
            fragments.push(TooltipFragment::Text(text));
            fragments.push(TooltipFragment::LineBreak);
        }
        fragments.push(TooltipFragment::Emphasis(datum.label.clone()));
        fragments
    }

    /// The account name, then its balance in every displayed currency,
    /// then the emphasized interval label.
    pub fn account(
        &self,
        ctx: &dyn ChartContext,
        datum: &BarGroupDatum,
        account: &str,
    ) -> Vec<TooltipFragment> {
        let mut fragments = Vec::with_capacity(datum.values.len() * 2 + 2);
        fragments.push(TooltipFragment::Emphasis(account.to_string()));
        for value in &datum.values {
            let amount = account_amount(&datum.account_balances, account, &value.currency);
            fragments.push(TooltipFragment::Text(ctx.amount(amount, &value.currency)));
            fragments.push(TooltipFragment::LineBreak);
        }
        fragments.push(TooltipFragment::Emphasis(datum.label.clone()));
        fragments
    }

    /// Tooltip for a point of the balances line chart; the date is always
    /// shown as a full day.
    pub fn line_point(
        &self,
        ctx: &dyn ChartContext,
        currency: &str,
        point: &LinePoint,
    ) -> Vec<TooltipFragment> {
        vec![
            TooltipFragment::Text(ctx.amount(point.value, currency)),
            TooltipFragment::LineBreak,
            TooltipFragment::Emphasis(point.date.format("%Y-%m-%d").to_string()),
        ]
    }
}

impl Default for TooltipService {
    fn default() -> Self {
        Self::new()
    }
}
