use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::budget::{BudgetCategory, BudgetLimit, BudgetPace, CategoryProgress, PaceStatus};
use crate::models::settings::EngineConfig;
use crate::models::spending::SpendingAggregate;
use crate::models::window::DateWindow;
use crate::services::category_service::CategoryService;

/// Compares actual spend with a linear, time-prorated expectation.
///
/// Expected progress on day `d` of an `n`-day period is `d / n`. Day-of-week
/// spending skew is not modelled.
pub struct BudgetService {
    category_service: CategoryService,
    tolerance_pct: f64,
    warning_limit_pct: f64,
    near_limit_pct: f64,
}

impl BudgetService {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            category_service: CategoryService::new(),
            tolerance_pct: config.pace_tolerance_pct,
            warning_limit_pct: config.pace_warning_limit_pct,
            near_limit_pct: config.near_limit_pct,
        }
    }

    /// Pair each budget line with what the aggregate says was spent on it.
    ///
    /// `spending` must cover the same window the pace is evaluated over.
    pub fn categories_from_spending(
        &self,
        limits: &[BudgetLimit],
        spending: &SpendingAggregate,
    ) -> Vec<BudgetCategory> {
        limits
            .iter()
            .map(|limit| {
                let name = self.category_service.display_name(Some(&limit.category));
                let spent = spending.category_amount(&name);
                BudgetCategory::new(name, limit.budget, spent)
            })
            .collect()
    }

    /// Pace of `categories` on `today` within `period` (usually a calendar month).
    pub fn pace(&self, categories: &[BudgetCategory], today: NaiveDate, period: &DateWindow) -> BudgetPace {
        let total_budget: f64 = categories
            .iter()
            .map(|c| c.budget)
            .fold(0.0, |acc, x| acc + x);
        let total_spent: f64 = categories
            .iter()
            .map(|c| c.spent)
            .fold(0.0, |acc, x| acc + x);

        let days_in_period = period.len_days();
        let raw_day = (today - period.start()).num_days() + 1;
        if !period.contains(today) {
            warn!(%today, start = %period.start(), end = %period.end(), "budget day outside period, clamping");
        }
        let day_of_period = raw_day.clamp(0, days_in_period);
        let elapsed = day_of_period as f64 / days_in_period as f64;

        let overall_progress_pct = if total_budget == 0.0 {
            0.0
        } else {
            (total_spent / total_budget * 100.0).min(100.0)
        };
        let expected_progress_pct = elapsed * 100.0;
        let is_on_track = overall_progress_pct <= expected_progress_pct + self.tolerance_pct;

        let expected_spend = (total_budget * day_of_period as f64 / days_in_period as f64).round();
        let pace_difference = total_spent - expected_spend;
        let pace_difference_pct = if expected_spend == 0.0 {
            0.0
        } else {
            pace_difference / expected_spend * 100.0
        };
        let status = self.classify(pace_difference, pace_difference_pct);

        let remaining_budget = (total_budget - total_spent).max(0.0);
        let days_left = days_in_period - day_of_period;
        let daily_allowance = if days_left > 0 {
            remaining_budget / days_left as f64
        } else {
            remaining_budget
        };

        let mut progress: Vec<(f64, CategoryProgress)> = categories
            .iter()
            .map(|c| (spend_ratio(c), self.category_progress(c)))
            .collect();
        progress.sort_by(|a, b| b.0.total_cmp(&a.0));

        debug!(
            total_budget,
            total_spent,
            overall_progress_pct,
            expected_progress_pct,
            %status,
            "computed budget pace"
        );

        BudgetPace {
            total_budget,
            total_spent,
            overall_progress_pct,
            expected_progress_pct,
            is_on_track,
            expected_spend,
            pace_difference,
            pace_difference_pct,
            status,
            day_of_period,
            days_in_period,
            remaining_budget,
            daily_allowance,
            categories: progress.into_iter().map(|(_, p)| p).collect(),
        }
    }

    /// under: at or below expected; warning: above by at most the limit; over: beyond it.
    pub fn classify(&self, pace_difference: f64, pace_difference_pct: f64) -> PaceStatus {
        if pace_difference <= 0.0 {
            PaceStatus::Under
        } else if pace_difference_pct.abs() <= self.warning_limit_pct {
            PaceStatus::Warning
        } else {
            PaceStatus::Over
        }
    }

    pub fn category_progress(&self, category: &BudgetCategory) -> CategoryProgress {
        let progress = if category.budget > 0.0 {
            (category.spent / category.budget * 100.0).min(100.0)
        } else {
            0.0
        };
        let is_over_budget = category.spent > category.budget;

        CategoryProgress {
            name: category.name.clone(),
            budget: category.budget,
            spent: category.spent,
            progress,
            is_over_budget,
            is_near_limit: progress >= self.near_limit_pct && !is_over_budget,
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort key only. An unbudgeted overspend ranks as infinite.
fn spend_ratio(category: &BudgetCategory) -> f64 {
    if category.budget > 0.0 {
        category.spent / category.budget
    } else if category.spent > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}
