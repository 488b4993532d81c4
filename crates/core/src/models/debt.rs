use serde::{Deserialize, Serialize};

/// How pressing a liability's due date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Overdue,
    Urgent,
    Soon,
    Normal,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Overdue => write!(f, "overdue"),
            Urgency::Urgent => write!(f, "urgent"),
            Urgency::Soon => write!(f, "soon"),
            Urgency::Normal => write!(f, "normal"),
        }
    }
}

/// Everything the debt screen shows for one liability.
/// Fields are `None` when the inputs they need are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityInsight {
    pub id: String,
    pub name: String,
    pub current_balance: f64,
    pub utilization_pct: Option<f64>,
    pub days_until_due: Option<i64>,
    pub urgency: Option<Urgency>,
    /// Interest accrued by waiting `cost_of_waiting_days`
    pub cost_of_waiting: Option<f64>,
    pub cost_of_waiting_days: u32,
    pub recommended_payment: f64,
    /// Late fee already incurred or about to be, when overdue
    pub late_fee_at_risk: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    /// 1-based
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Amortization of a balance under a fixed monthly payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSchedule {
    pub months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub schedule: Vec<PayoffMonth>,
}
