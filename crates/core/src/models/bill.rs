use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ResolvedCategory;

/// How often a recurring charge repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl Cadence {
    /// Occurrences per year, used to express any cadence as a monthly cost.
    pub fn occurrences_per_year(&self) -> f64 {
        match self {
            Cadence::Weekly => 52.0,
            Cadence::Biweekly => 26.0,
            Cadence::Monthly => 12.0,
            Cadence::Yearly => 1.0,
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::Weekly => write!(f, "weekly"),
            Cadence::Biweekly => write!(f, "biweekly"),
            Cadence::Monthly => write!(f, "monthly"),
            Cadence::Yearly => write!(f, "yearly"),
        }
    }
}

/// A detected recurring charge (subscription, rent, utility...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringCharge {
    pub id: String,

    pub merchant: String,

    pub cadence: Cadence,

    /// Next expected charge day
    pub next_date: NaiveDate,

    /// Typical charge size (positive)
    pub avg_amount: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_category: Option<String>,
}

impl RecurringCharge {
    pub fn new(
        id: impl Into<String>,
        merchant: impl Into<String>,
        cadence: Cadence,
        next_date: NaiveDate,
        avg_amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            merchant: merchant.into(),
            cadence,
            next_date,
            avg_amount,
            raw_category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.raw_category = Some(category.into());
        self
    }
}

/// A bill falling due inside a look-ahead horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBill {
    pub bill_id: String,
    pub merchant: String,
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub amount: f64,
    pub category: ResolvedCategory,
}
