use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for the entire finance-engine-core library.
///
/// Calculators never fail: missing optional fields, zero divisors and
/// negative Safe-to-Spend all resolve to defined values. Errors only come
/// from the boundaries where inputs are constructed or parsed.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Construction ────────────────────────────────────────────────
    #[error("Invalid date window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
