use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Currency code → amount, in the order the keys appeared in the input.
pub type CurrencyAmounts = IndexMap<String, f64>;

/// Account name → per-currency balance of that account.
pub type AccountBalances = IndexMap<String, CurrencyAmounts>;

/// One interval (year, month, week, ...) of balances and budgets.
///
/// Produced once by the validation service and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// First day of the interval
    pub date: NaiveDate,

    /// Budgeted amount per currency
    pub budgets: CurrencyAmounts,

    /// Total balance per currency
    pub balance: CurrencyAmounts,

    /// Balance per account, per currency
    pub account_balances: AccountBalances,
}

impl Interval {
    /// Balance for `currency`, or 0 if the interval has none.
    pub fn balance_in(&self, currency: &str) -> f64 {
        self.balance.get(currency).copied().unwrap_or(0.0)
    }

    /// Budget for `currency`, or 0 if the interval has none.
    pub fn budget_in(&self, currency: &str) -> f64 {
        self.budgets.get(currency).copied().unwrap_or(0.0)
    }
}

/// Balance of an account at one date, input of the balances line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: CurrencyAmounts,
}

/// Look up `account_balances[account][currency]`, defaulting to 0.
pub fn account_amount(balances: &AccountBalances, account: &str, currency: &str) -> f64 {
    balances
        .get(account)
        .and_then(|amounts| amounts.get(currency))
        .copied()
        .unwrap_or(0.0)
}
