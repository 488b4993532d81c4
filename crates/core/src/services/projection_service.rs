use tracing::debug;

use crate::models::investment::{gain_percent, InvestmentAccount};
use crate::models::projection::{HoldingGain, InvestmentSummary, ProjectionPoint};

/// Projects portfolio growth and summarizes investment gains.
///
/// Growth is simulated month by month (`value = value × (1 + r) + contribution`);
/// results follow the loop's rounding order exactly.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Value after `years` of monthly compounding with a contribution added
    /// at the end of every month.
    pub fn project_growth(
        &self,
        current_value: f64,
        monthly_contribution: f64,
        years: u32,
        annual_return_pct: f64,
    ) -> f64 {
        let monthly_return = annual_return_pct / 100.0 / 12.0;
        let months = years * 12;
        let mut value = current_value;
        for _ in 0..months {
            value = value * (1.0 + monthly_return) + monthly_contribution;
        }
        value
    }

    /// One point per year end, from year 1 through `years`.
    ///
    /// Runs the same loop as [`ProjectionService::project_growth`], so the last
    /// point equals its result.
    pub fn projection_series(
        &self,
        current_value: f64,
        monthly_contribution: f64,
        years: u32,
        annual_return_pct: f64,
    ) -> Vec<ProjectionPoint> {
        let monthly_return = annual_return_pct / 100.0 / 12.0;
        let mut value = current_value;
        let mut contributed = current_value;
        let mut points = Vec::with_capacity(years as usize);

        for year in 1..=years {
            for _ in 0..12 {
                value = value * (1.0 + monthly_return) + monthly_contribution;
                contributed += monthly_contribution;
            }
            points.push(ProjectionPoint {
                year,
                value,
                total_contributed: contributed,
            });
        }
        points
    }

    /// Gains per account and for the whole portfolio.
    pub fn summarize(&self, accounts: &[InvestmentAccount]) -> InvestmentSummary {
        let total_balance: f64 = accounts
            .iter()
            .map(|a| a.balance)
            .fold(0.0, |acc, x| acc + x);
        let total_contributions: f64 = accounts
            .iter()
            .map(|a| a.contributions)
            .fold(0.0, |acc, x| acc + x);
        let total_gain = total_balance - total_contributions;

        let mut holdings: Vec<HoldingGain> = accounts
            .iter()
            .map(|a| HoldingGain {
                id: a.id.clone(),
                name: a.name.clone(),
                balance: a.balance,
                contributions: a.contributions,
                gain: a.gain(),
                gain_percent: a.gain_percent(),
            })
            .collect();
        holdings.sort_by(|a, b| b.balance.total_cmp(&a.balance));

        let summary = InvestmentSummary {
            total_balance,
            total_contributions,
            total_gain,
            gain_percent: gain_percent(total_gain, total_contributions),
            holdings,
        };
        debug!(
            total_balance,
            total_gain,
            gain_percent = summary.gain_percent,
            "summarized investments"
        );
        summary
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
