use std::collections::BTreeSet;

use crate::models::bar_chart::{BarGroupDatum, CurrencyStack, Series, SeriesSegment};
use crate::models::interval::account_amount;

/// Stack one layer per key on top of each datum, diverging around zero.
///
/// For every datum, layers are visited in `keys` order. Positive values are
/// stacked upwards from 0 and negative values downwards from 0, each on its
/// own running total, so values of opposite sign never cancel out.
/// Zero (and NaN) values yield `[0, value]`.
///
/// Returns `result[key_index][datum_index] = [lower, upper]`.
pub fn stack_diverging<D, K, F>(keys: &[K], data: &[D], value: F) -> Vec<Vec<[f64; 2]>>
where
    F: Fn(&D, &K) -> f64,
{
    let mut layers: Vec<Vec<[f64; 2]>> = keys
        .iter()
        .map(|key| data.iter().map(|datum| [0.0, value(datum, key)]).collect())
        .collect();

    for j in 0..data.len() {
        let mut positive = 0.0;
        let mut negative = 0.0;
        for layer in layers.iter_mut() {
            let point = &mut layer[j];
            let dy = point[1] - point[0];
            if dy > 0.0 {
                *point = [positive, positive + dy];
                positive += dy;
            } else if dy < 0.0 {
                *point = [negative + dy, negative];
                negative += dy;
            } else {
                *point = [0.0, dy];
            }
        }
    }

    layers
}

/// Builds the per-currency account stacks of the bar chart.
pub struct StackService;

impl StackService {
    pub fn new() -> Self {
        Self
    }

    /// All account names used in any bar group, deduplicated and sorted.
    pub fn collect_accounts(&self, bar_groups: &[BarGroupDatum]) -> Vec<String> {
        bar_groups
            .iter()
            .flat_map(|group| group.account_balances.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// One stack per currency, each with one series per account.
    ///
    /// Segments without height or with a NaN upper bound are dropped after
    /// stacking; the remaining ones keep the index of their bar group.
    pub fn build_stacks(
        &self,
        bar_groups: &[BarGroupDatum],
        accounts: &[String],
        currencies: &[String],
    ) -> Vec<CurrencyStack> {
        currencies
            .iter()
            .map(|currency| {
                let layers = stack_diverging(accounts, bar_groups, |group, account| {
                    account_amount(&group.account_balances, account, currency)
                });

                let series = accounts
                    .iter()
                    .zip(layers)
                    .map(|(account, layer)| Series {
                        account: account.clone(),
                        segments: layer
                            .into_iter()
                            .enumerate()
                            .filter(|(_, [lower, upper])| lower != upper && !upper.is_nan())
                            .map(|(group, [lower, upper])| SeriesSegment { lower, upper, group })
                            .collect(),
                    })
                    .collect();

                CurrencyStack {
                    currency: currency.clone(),
                    series,
                }
            })
            .collect()
    }
}

impl Default for StackService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[&[f64]]) -> Vec<Vec<[f64; 2]>> {
        // values[datum][key]
        let keys: Vec<usize> = (0..values.first().map_or(0, |v| v.len())).collect();
        stack_diverging(&keys, values, |row, &k| row[k])
    }

    #[test]
    fn positives_accumulate_upwards() {
        let layers = stack(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(layers, vec![vec![[0.0, 1.0]], vec![[1.0, 3.0]], vec![[3.0, 6.0]]]);
    }

    #[test]
    fn negatives_accumulate_downwards() {
        let layers = stack(&[&[-1.0, -2.0]]);
        assert_eq!(layers, vec![vec![[-1.0, 0.0]], vec![[-3.0, -1.0]]]);
    }

    #[test]
    fn mixed_signs_do_not_cancel() {
        let layers = stack(&[&[5.0, -2.0, 3.0, -4.0]]);
        assert_eq!(
            layers,
            vec![
                vec![[0.0, 5.0]],
                vec![[-2.0, 0.0]],
                vec![[5.0, 8.0]],
                vec![[-6.0, -2.0]],
            ]
        );
    }

    #[test]
    fn zero_and_nan_values_sit_at_the_baseline() {
        let layers = stack(&[&[3.0, 0.0, f64::NAN]]);
        assert_eq!(layers[0], vec![[0.0, 3.0]]);
        assert_eq!(layers[1], vec![[0.0, 0.0]]);
        assert_eq!(layers[2][0][0], 0.0);
        assert!(layers[2][0][1].is_nan());
    }

    #[test]
    fn each_datum_restarts_from_zero() {
        let layers = stack(&[&[1.0, 1.0], &[-1.0, 2.0]]);
        assert_eq!(layers[0], vec![[0.0, 1.0], [-1.0, 0.0]]);
        assert_eq!(layers[1], vec![[1.0, 2.0], [0.0, 2.0]]);
    }

    #[test]
    fn no_keys_or_no_data() {
        let empty: Vec<&[f64]> = Vec::new();
        assert!(stack(&empty).is_empty());
        let keys = ["a", "b"];
        let data: [f64; 0] = [];
        let layers = stack_diverging(&keys, &data, |d, _| *d);
        assert_eq!(layers, vec![Vec::<[f64; 2]>::new(), Vec::new()]);
    }
}
