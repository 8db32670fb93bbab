use chrono::NaiveDate;

/// Everything the chart pipeline needs from its caller.
///
/// Implement this to plug in locale-aware number formatting or a custom
/// date format; `SettingsContext` is the default implementation.
pub trait ChartContext {
    /// Currencies that are always displayed first when present in the data.
    fn operating_currencies(&self) -> &[String];

    /// Label for the interval starting at `date`.
    fn date_label(&self, date: NaiveDate) -> String;

    /// Format `value` as an amount of `currency`.
    fn amount(&self, value: f64, currency: &str) -> String;
}
