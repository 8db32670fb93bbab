use chrono::NaiveDate;

use crate::models::settings::ChartSettings;
use super::traits::ChartContext;

/// `ChartContext` driven by `ChartSettings`.
///
/// Amounts are rendered as `"<value> <currency>"` with the configured
/// number of decimals, e.g. `"1234.50 EUR"`.
#[derive(Debug, Clone, Default)]
pub struct SettingsContext {
    settings: ChartSettings,
}

impl SettingsContext {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }
}

impl ChartContext for SettingsContext {
    fn operating_currencies(&self) -> &[String] {
        &self.settings.operating_currencies
    }

    fn date_label(&self, date: NaiveDate) -> String {
        self.settings.interval.label(date)
    }

    fn amount(&self, value: f64, currency: &str) -> String {
        let precision = self.settings.precision_for(currency);
        let mut rendered = format!("{value:.precision$}");
        // "-0.00" for tiny negative values
        if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
            rendered.remove(0);
        }
        format!("{rendered} {currency}")
    }
}
