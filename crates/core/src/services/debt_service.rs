use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::debt::{LiabilityInsight, PayoffMonth, PayoffSchedule, Urgency};
use crate::models::liability::Liability;
use crate::models::settings::EngineConfig;
use crate::services::calendar_service::CalendarService;

/// Payoff projections give up after 50 years.
const MAX_PAYOFF_MONTHS: u32 = 600;

/// Remaining balances below this are treated as paid off.
const PAID_OFF_EPSILON: f64 = 1e-9;

/// Interest, urgency and payment guidance for liabilities.
///
/// Cost of waiting is simple daily interest (`balance × apr / 365 × days`),
/// a short-horizon nudge rather than a billing-accurate figure. Payoff
/// schedules compound monthly.
pub struct DebtService {
    urgent_within_days: i64,
    soon_within_days: i64,
    cost_of_waiting_days: u32,
}

impl DebtService {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            urgent_within_days: config.urgent_within_days,
            soon_within_days: config.soon_within_days,
            cost_of_waiting_days: config.cost_of_waiting_days,
        }
    }

    /// `apr / 100 / 365`
    pub fn daily_rate(&self, apr_percent: f64) -> f64 {
        apr_percent / 100.0 / 365.0
    }

    /// Interest accrued on `balance` over `days` without compounding.
    pub fn cost_of_waiting(&self, balance: f64, apr_percent: f64, days: u32) -> f64 {
        balance * self.daily_rate(apr_percent) * f64::from(days)
    }

    /// Balance over limit, for credit cards with a known, non-zero limit.
    pub fn utilization_percent(&self, liability: &Liability) -> Option<f64> {
        if !liability.is_credit_card() {
            return None;
        }
        liability
            .credit_limit
            .filter(|limit| *limit > 0.0)
            .map(|limit| liability.current_balance / limit * 100.0)
    }

    pub fn urgency(&self, days_until_due: i64) -> Urgency {
        if days_until_due < 0 {
            Urgency::Overdue
        } else if days_until_due <= self.urgent_within_days {
            Urgency::Urgent
        } else if days_until_due <= self.soon_within_days {
            Urgency::Soon
        } else {
            Urgency::Normal
        }
    }

    /// Pay what is safe to spend, but never more than is owed.
    pub fn recommended_payment(&self, safe_to_spend: f64, balance: f64) -> f64 {
        safe_to_spend.min(balance).max(0.0)
    }

    pub fn insight(
        &self,
        liability: &Liability,
        safe_to_spend: f64,
        now: &DateTime<Utc>,
        calendar: &CalendarService,
    ) -> LiabilityInsight {
        let days_until_due = liability.due_date.map(|due| calendar.days_until(due, now));
        let urgency = days_until_due.map(|days| self.urgency(days));
        let cost_of_waiting = liability
            .apr
            .map(|apr| self.cost_of_waiting(liability.current_balance, apr, self.cost_of_waiting_days));
        let late_fee_at_risk = match urgency {
            Some(Urgency::Overdue) => liability.late_fee,
            _ => None,
        };

        LiabilityInsight {
            id: liability.id.clone(),
            name: liability.name.clone(),
            current_balance: liability.current_balance,
            utilization_pct: self.utilization_percent(liability),
            days_until_due,
            urgency,
            cost_of_waiting,
            cost_of_waiting_days: self.cost_of_waiting_days,
            recommended_payment: self.recommended_payment(safe_to_spend, liability.current_balance),
            late_fee_at_risk,
        }
    }

    /// Insights for every liability, most pressing first: by urgency, then
    /// nearest due date, then highest cost of waiting. Undated debts go last.
    pub fn insights(
        &self,
        liabilities: &[Liability],
        safe_to_spend: f64,
        now: &DateTime<Utc>,
        calendar: &CalendarService,
    ) -> Vec<LiabilityInsight> {
        let mut insights: Vec<LiabilityInsight> = liabilities
            .iter()
            .map(|l| self.insight(l, safe_to_spend, now, calendar))
            .collect();

        insights.sort_by(|a, b| {
            let rank = |i: &LiabilityInsight| (i.urgency.is_none(), i.urgency, i.days_until_due);
            rank(a).cmp(&rank(b)).then_with(|| {
                b.cost_of_waiting
                    .unwrap_or(0.0)
                    .total_cmp(&a.cost_of_waiting.unwrap_or(0.0))
            })
        });
        insights
    }

    /// Month-by-month amortization under a fixed payment.
    ///
    /// `None` when the payment never retires the balance (it does not cover
    /// the first month's interest) or payoff would exceed 50 years.
    pub fn payoff_schedule(&self, balance: f64, apr_percent: f64, monthly_payment: f64) -> Option<PayoffSchedule> {
        if monthly_payment <= 0.0 && balance > 0.0 {
            return None;
        }

        let monthly_rate = apr_percent / 100.0 / 12.0;
        let mut remaining = balance.max(0.0);
        let mut schedule = Vec::new();
        let mut total_interest = 0.0;
        let mut total_paid = 0.0;

        while remaining > PAID_OFF_EPSILON {
            let month = schedule.len() as u32 + 1;
            if month > MAX_PAYOFF_MONTHS {
                debug!(balance, apr_percent, monthly_payment, "payoff exceeds projection cap");
                return None;
            }

            let interest = remaining * monthly_rate;
            if monthly_payment <= interest {
                return None;
            }
            let payment = monthly_payment.min(remaining + interest);
            let principal = payment - interest;
            remaining -= principal;
            if remaining < PAID_OFF_EPSILON {
                remaining = 0.0;
            }

            total_interest += interest;
            total_paid += payment;
            schedule.push(PayoffMonth {
                month,
                payment,
                interest,
                principal,
                remaining_balance: remaining,
            });
        }

        Some(PayoffSchedule {
            months: schedule.len() as u32,
            total_interest,
            total_paid,
            schedule,
        })
    }

    /// Payoff paying only the minimum; needs both an APR and a minimum payment.
    pub fn minimum_payment_payoff(&self, liability: &Liability) -> Option<PayoffSchedule> {
        let apr = liability.apr?;
        let minimum = liability.minimum_payment?;
        self.payoff_schedule(liability.current_balance, apr, minimum)
    }
}

impl Default for DebtService {
    fn default() -> Self {
        Self::new()
    }
}
