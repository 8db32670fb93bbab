use thiserror::Error;

/// Unified error type for the entire interval-chart-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Only the input boundary can fail. Once intervals are validated, currency
/// selection, bar groups, stacks and tooltips are infallible.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Chart data validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown chart type: {0}")]
    UnknownChartType(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid chart settings: {0}")]
    Configuration(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
