use serde::{Deserialize, Serialize};

/// A budget line as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimit {
    /// Raw or display category name
    pub category: String,
    pub budget: f64,
}

impl BudgetLimit {
    pub fn new(category: impl Into<String>, budget: f64) -> Self {
        Self {
            category: category.into(),
            budget,
        }
    }
}

/// Budget versus actual for one category over the budget window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub budget: f64,
    pub spent: f64,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, budget: f64, spent: f64) -> Self {
        Self {
            name: name.into(),
            budget,
            spent,
        }
    }
}

/// Three-way pace classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceStatus {
    /// At or below expected spend
    Under,
    /// Above expected spend, within the warning band
    Warning,
    /// Beyond the warning band
    Over,
}

impl std::fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaceStatus::Under => write!(f, "under"),
            PaceStatus::Warning => write!(f, "warning"),
            PaceStatus::Over => write!(f, "over"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub name: String,
    pub budget: f64,
    pub spent: f64,
    /// `min(100, spent / budget * 100)`, `0` for a zero budget
    pub progress: f64,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPace {
    pub total_budget: f64,
    pub total_spent: f64,
    pub overall_progress_pct: f64,
    pub expected_progress_pct: f64,
    pub is_on_track: bool,
    pub expected_spend: f64,
    pub pace_difference: f64,
    pub pace_difference_pct: f64,
    pub status: PaceStatus,
    /// 1-based day within the window
    pub day_of_period: i64,
    pub days_in_period: i64,
    /// Unspent budget, never negative
    pub remaining_budget: f64,
    /// Remaining budget spread over the days left after today
    pub daily_allowance: f64,
    /// Sorted by `spent / budget`, highest first
    pub categories: Vec<CategoryProgress>,
}
