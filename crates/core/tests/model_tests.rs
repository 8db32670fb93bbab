use chrono::NaiveDate;
use serde_json::json;

use interval_chart_core::errors::CoreError;
use interval_chart_core::formatting::settings_context::SettingsContext;
use interval_chart_core::formatting::traits::ChartContext;
use interval_chart_core::models::bar_chart::{BarChart, SeriesSegment};
use interval_chart_core::models::chart::Chart;
use interval_chart_core::models::interval::{account_amount, AccountBalances, Interval};
use interval_chart_core::models::line_chart::LineChart;
use interval_chart_core::models::settings::{ChartSettings, IntervalGranularity};
use interval_chart_core::models::tooltip::{TooltipFragment, TooltipTarget};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  IntervalGranularity
// ═══════════════════════════════════════════════════════════════════

mod granularity {
    use super::*;

    #[test]
    fn year_label() {
        assert_eq!(IntervalGranularity::Year.label(d(2024, 1, 1)), "2024");
    }

    #[test]
    fn quarter_label() {
        assert_eq!(IntervalGranularity::Quarter.label(d(2024, 1, 1)), "2024Q1");
        assert_eq!(IntervalGranularity::Quarter.label(d(2024, 4, 1)), "2024Q2");
        assert_eq!(IntervalGranularity::Quarter.label(d(2024, 9, 30)), "2024Q3");
        assert_eq!(IntervalGranularity::Quarter.label(d(2024, 12, 1)), "2024Q4");
    }

    #[test]
    fn month_label() {
        assert_eq!(IntervalGranularity::Month.label(d(2024, 1, 1)), "Jan 2024");
        assert_eq!(IntervalGranularity::Month.label(d(2023, 12, 1)), "Dec 2023");
    }

    #[test]
    fn week_label() {
        // 2024-01-01 is a Monday, so it starts week 01
        assert_eq!(IntervalGranularity::Week.label(d(2024, 1, 1)), "2024W01");
        assert_eq!(IntervalGranularity::Week.label(d(2024, 1, 29)), "2024W05");
    }

    #[test]
    fn day_label() {
        assert_eq!(IntervalGranularity::Day.label(d(2024, 2, 29)), "2024-02-29");
    }

    #[test]
    fn default_is_month() {
        assert_eq!(IntervalGranularity::default(), IntervalGranularity::Month);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&IntervalGranularity::Quarter).unwrap(), "\"quarter\"");
        let back: IntervalGranularity = serde_json::from_str("\"week\"").unwrap();
        assert_eq!(back, IntervalGranularity::Week);
    }

    #[test]
    fn display() {
        assert_eq!(IntervalGranularity::Day.to_string(), "day");
        assert_eq!(IntervalGranularity::Year.to_string(), "year");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartSettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = ChartSettings::default();
        assert!(s.operating_currencies.is_empty());
        assert_eq!(s.interval, IntervalGranularity::Month);
        assert_eq!(s.default_precision, 2);
        assert!(s.currency_precision.is_empty());
    }

    #[test]
    fn from_json_partial_uses_defaults() {
        let s = ChartSettings::from_json(r#"{"operating_currencies": ["EUR", "USD"], "interval": "year"}"#)
            .unwrap();
        assert_eq!(s.operating_currencies, vec!["EUR", "USD"]);
        assert_eq!(s.interval, IntervalGranularity::Year);
        assert_eq!(s.default_precision, 2);
    }

    #[test]
    fn from_json_empty_object() {
        assert_eq!(ChartSettings::from_json("{}").unwrap(), ChartSettings::default());
    }

    #[test]
    fn from_json_invalid_interval() {
        let err = ChartSettings::from_json(r#"{"interval": "decade"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn from_json_not_json() {
        assert!(matches!(
            ChartSettings::from_json("nope"),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn precision_for_falls_back_to_default() {
        let s = ChartSettings::from_json(r#"{"currency_precision": {"JPY": 0}, "default_precision": 3}"#)
            .unwrap();
        assert_eq!(s.precision_for("JPY"), 0);
        assert_eq!(s.precision_for("EUR"), 3);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SettingsContext
// ═══════════════════════════════════════════════════════════════════

mod settings_context {
    use super::*;

    fn ctx(json: &str) -> SettingsContext {
        SettingsContext::new(ChartSettings::from_json(json).unwrap())
    }

    #[test]
    fn amount_uses_default_precision() {
        let c = ctx("{}");
        assert_eq!(c.amount(1234.5, "EUR"), "1234.50 EUR");
        assert_eq!(c.amount(-12.0, "USD"), "-12.00 USD");
    }

    #[test]
    fn amount_uses_currency_precision() {
        let c = ctx(r#"{"currency_precision": {"JPY": 0}}"#);
        assert_eq!(c.amount(1234.6, "JPY"), "1235 JPY");
    }

    #[test]
    fn amount_never_renders_negative_zero() {
        let c = ctx("{}");
        assert_eq!(c.amount(-0.001, "USD"), "0.00 USD");
        assert_eq!(c.amount(-0.0, "USD"), "0.00 USD");
    }

    #[test]
    fn date_label_follows_interval() {
        assert_eq!(ctx(r#"{"interval": "quarter"}"#).date_label(d(2024, 5, 1)), "2024Q2");
        assert_eq!(ctx("{}").date_label(d(2024, 5, 1)), "May 2024");
    }

    #[test]
    fn operating_currencies() {
        let c = ctx(r#"{"operating_currencies": ["CHF"]}"#);
        assert_eq!(c.operating_currencies(), ["CHF".to_string()]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Interval
// ═══════════════════════════════════════════════════════════════════

mod interval {
    use super::*;

    fn sample() -> Interval {
        serde_json::from_value(json!({
            "date": "2024-03-01",
            "budgets": {"USD": 100},
            "balance": {"USD": 120.5, "EUR": 3},
            "account_balances": {
                "Expenses:Food": {"USD": 80},
                "Expenses:Rent": {"USD": 40.5, "EUR": 3}
            }
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_dates_and_amounts() {
        let i = sample();
        assert_eq!(i.date, d(2024, 3, 1));
        assert_eq!(i.balance["USD"], 120.5);
        assert_eq!(i.budgets["USD"], 100.0);
    }

    #[test]
    fn keeps_document_key_order() {
        let i = sample();
        let keys: Vec<&String> = i.balance.keys().collect();
        assert_eq!(keys, ["USD", "EUR"]);
    }

    #[test]
    fn missing_entries_default_to_zero() {
        let i = sample();
        assert_eq!(i.balance_in("GBP"), 0.0);
        assert_eq!(i.budget_in("EUR"), 0.0);
        assert_eq!(i.balance_in("EUR"), 3.0);
    }

    #[test]
    fn account_amount_lookup() {
        let i = sample();
        assert_eq!(account_amount(&i.account_balances, "Expenses:Rent", "EUR"), 3.0);
        assert_eq!(account_amount(&i.account_balances, "Expenses:Food", "EUR"), 0.0);
        assert_eq!(account_amount(&i.account_balances, "Assets:Cash", "USD"), 0.0);
        assert_eq!(account_amount(&AccountBalances::new(), "Assets:Cash", "USD"), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Tooltip types
// ═══════════════════════════════════════════════════════════════════

mod tooltip {
    use super::*;

    #[test]
    fn empty_selector_is_aggregate() {
        assert_eq!(TooltipTarget::from_selector(""), TooltipTarget::Aggregate);
    }

    #[test]
    fn account_selector() {
        assert_eq!(
            TooltipTarget::from_selector("Assets:Cash"),
            TooltipTarget::Account("Assets:Cash".into())
        );
    }

    #[test]
    fn fragment_serialization() {
        assert_eq!(
            serde_json::to_value(TooltipFragment::Text("12.00 USD".into())).unwrap(),
            json!({"type": "text", "text": "12.00 USD"})
        );
        assert_eq!(
            serde_json::to_value(TooltipFragment::LineBreak).unwrap(),
            json!({"type": "line_break"})
        );
        assert_eq!(
            serde_json::to_value(TooltipFragment::Emphasis("Jan 2024".into())).unwrap(),
            json!({"type": "emphasis", "text": "Jan 2024"})
        );
    }

    #[test]
    fn fragments_display_as_plain_text() {
        let fragments = [
            TooltipFragment::Text("1.00 USD".into()),
            TooltipFragment::LineBreak,
            TooltipFragment::Emphasis("2024".into()),
        ];
        let text: String = fragments.iter().map(|f| f.to_string()).collect();
        assert_eq!(text, "1.00 USD\n2024");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart models
// ═══════════════════════════════════════════════════════════════════

mod charts {
    use super::*;

    fn empty_bar_chart() -> BarChart {
        BarChart {
            accounts: Vec::new(),
            currencies: Vec::new(),
            bar_groups: Vec::new(),
            stacks: Vec::new(),
            has_stacked_data: false,
        }
    }

    #[test]
    fn segment_height() {
        let s = SeriesSegment { lower: -3.0, upper: 2.0, group: 0 };
        assert_eq!(s.height(), 5.0);
    }

    #[test]
    fn bar_group_for_out_of_range_segment() {
        let chart = empty_bar_chart();
        let s = SeriesSegment { lower: 0.0, upper: 1.0, group: 4 };
        assert!(chart.bar_group_for(&s).is_none());
        assert!(chart.stack("USD").is_none());
    }

    #[test]
    fn chart_variant_accessors() {
        let bar = Chart::Bar(empty_bar_chart());
        let line = Chart::Line(LineChart::default());
        assert!(bar.as_bar().is_some());
        assert!(bar.as_line().is_none());
        assert!(line.as_line().is_some());
        assert!(line.as_bar().is_none());
    }

    #[test]
    fn chart_serializes_with_kind_tag() {
        let value = serde_json::to_value(Chart::Line(LineChart::default())).unwrap();
        assert_eq!(value, json!({"kind": "line", "series": []}));
    }
}
