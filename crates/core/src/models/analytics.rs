use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bill::UpcomingBill;
use super::debt::LiabilityInsight;
use super::projection::InvestmentSummary;
use super::spending::{CategoryShare, TrendDelta};
use super::summary::{NetWorthSummary, SafeToSpend};

/// Everything the home screen needs, computed from one snapshot at one
/// instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Local calendar day the summary was computed for
    pub as_of: NaiveDate,

    pub safe_to_spend: SafeToSpend,

    pub net_worth: NetWorthSummary,

    /// Spending so far this calendar month
    pub month_spending: f64,

    /// This month's spending by category, largest first
    pub month_categories: Vec<CategoryShare>,

    /// This Monday-start week versus last
    pub week_over_week: TrendDelta,

    /// Most pressing first
    pub liabilities: Vec<LiabilityInsight>,

    pub investments: InvestmentSummary,

    pub upcoming_bills: Vec<UpcomingBill>,

    /// Round-ups swept this month (0 when disabled)
    pub month_round_ups: f64,
}
