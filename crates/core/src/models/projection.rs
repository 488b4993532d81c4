use serde::{Deserialize, Serialize};

/// Projected portfolio value at the end of a projection year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
    /// Starting value plus every contribution made so far
    pub total_contributed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingGain {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub contributions: f64,
    pub gain: f64,
    pub gain_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total_balance: f64,
    pub total_contributions: f64,
    pub total_gain: f64,
    pub gain_percent: f64,
    /// Largest balance first
    pub holdings: Vec<HoldingGain>,
}
