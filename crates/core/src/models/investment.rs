use serde::{Deserialize, Serialize};

/// A brokerage or retirement account. Gain is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentAccount {
    pub id: String,

    pub name: String,

    /// Current market value
    pub balance: f64,

    /// Cost basis: total money put in
    pub contributions: f64,
}

impl InvestmentAccount {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64, contributions: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            contributions,
        }
    }

    pub fn gain(&self) -> f64 {
        self.balance - self.contributions
    }

    /// Gain relative to cost basis, `0` when nothing was contributed.
    pub fn gain_percent(&self) -> f64 {
        gain_percent(self.gain(), self.contributions)
    }
}

pub(crate) fn gain_percent(gain: f64, contributions: f64) -> f64 {
    if contributions == 0.0 {
        0.0
    } else {
        gain / contributions * 100.0
    }
}
