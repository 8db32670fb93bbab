use indexmap::IndexMap;

use crate::models::interval::Interval;

/// Minimum number of currencies the chart tries to show.
pub const MIN_DISPLAYED_CURRENCIES: usize = 5;

/// Picks which currencies the bar chart displays.
///
/// Operating currencies found in the data come first, in the configured
/// order. The remaining slots (up to `max(operating.len(), 5)` in total)
/// go to the currencies used most often across all intervals.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Select the ordered list of currencies to display.
    ///
    /// Every key of every interval's `budgets` and `balance` counts as one
    /// occurrence. Ties keep first-seen order, so the result is fully
    /// determined by the input.
    pub fn select_currencies(&self, intervals: &[Interval], operating: &[String]) -> Vec<String> {
        let mut counts = Self::count_occurrences(intervals);

        let mut selected: Vec<String> = Vec::new();
        for currency in operating {
            // shift_remove keeps the first-seen order of what's left
            if counts.shift_remove(currency).is_some() {
                selected.push(currency.clone());
            }
        }

        let max_pick = operating.len().max(MIN_DISPLAYED_CURRENCIES);
        let remaining_slots = max_pick.saturating_sub(selected.len());
        if remaining_slots == 0 {
            return selected;
        }

        let mut rest: Vec<(String, usize)> = counts.into_iter().collect();
        // sort_by is stable: equal counts stay in first-seen order
        rest.sort_by(|a, b| b.1.cmp(&a.1));
        selected.extend(rest.into_iter().take(remaining_slots).map(|(c, _)| c));
        selected
    }

    /// Occurrence count per currency, in first-seen order.
    pub fn count_occurrences(intervals: &[Interval]) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for interval in intervals {
            for currency in interval.budgets.keys().chain(interval.balance.keys()) {
                *counts.entry(currency.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
