use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::interval::{BalancePoint, Interval};

/// Decodes untyped chart data into typed records.
///
/// Unknown fields are ignored; missing fields, wrong types and malformed
/// dates are rejected with `CoreError::ValidationError`.
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Decode `[{date, budgets, balance, account_balances}, ...]`.
    pub fn decode_intervals(&self, value: &Value) -> Result<Vec<Interval>, CoreError> {
        Self::decode(value, "interval")
    }

    /// Same as `decode_intervals`, from JSON text.
    pub fn decode_intervals_str(&self, json: &str) -> Result<Vec<Interval>, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        self.decode_intervals(&value)
    }

    /// Decode `[{date, balance}, ...]` for the balances line chart.
    pub fn decode_balance_points(&self, value: &Value) -> Result<Vec<BalancePoint>, CoreError> {
        Self::decode(value, "balance")
    }

    fn decode<T: DeserializeOwned>(value: &Value, what: &str) -> Result<Vec<T>, CoreError> {
        if !value.is_array() {
            warn!(what, "chart data is not an array");
            return Err(CoreError::ValidationError(format!(
                "expected an array of {what} records, got {}",
                Self::type_name(value)
            )));
        }
        Vec::<T>::deserialize(value).map_err(|e| {
            warn!(what, error = %e, "chart data failed validation");
            CoreError::ValidationError(format!("invalid {what} record: {e}"))
        })
    }

    fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
