use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::AccountType;
use super::liability::LiabilityType;

/// Components behind a Safe-to-Spend figure. None of these are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeToSpendBreakdown {
    /// Available balance across checking accounts
    pub liquid_available: f64,

    /// Pending money leaving
    pub pending_outflows: f64,

    /// Bills due inside the horizon
    pub upcoming_essentials: f64,

    pub user_buffer: f64,

    /// The formula before clamping; negative means overcommitted
    pub raw_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeToSpend {
    /// Never negative
    pub amount: f64,
    pub horizon_days: i64,
    pub breakdown: SafeToSpendBreakdown,
}

impl SafeToSpend {
    /// Whether commitments exceed what is available.
    pub fn is_overcommitted(&self) -> bool {
        self.breakdown.raw_amount < 0.0
    }

    /// How far commitments exceed what is available, `0` if they don't.
    pub fn shortfall(&self) -> f64 {
        (-self.breakdown.raw_amount).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    pub assets: f64,
    pub liabilities: f64,
    /// May be negative
    pub net_worth: f64,
    pub assets_by_type: BTreeMap<AccountType, f64>,
    pub liabilities_by_type: BTreeMap<LiabilityType, f64>,
}
