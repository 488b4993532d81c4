use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::account::Account;
use crate::models::bill::RecurringCharge;
use crate::models::summary::{SafeToSpend, SafeToSpendBreakdown};
use crate::models::transaction::Transaction;
use crate::services::calendar_service::CalendarService;

/// Computes how much can be spent today without touching near-term bills or
/// the user's buffer.
///
/// `amount = max(0, liquid − pending outflows − bills due within the horizon − buffer)`.
/// The breakdown keeps the unclamped components so callers can show a deficit.
pub struct SafeToSpendService;

impl SafeToSpendService {
    pub fn new() -> Self {
        Self
    }

    /// Only pending outflows count against the amount: settled rows and
    /// pending deposits in `transactions` are ignored, so callers may pass
    /// either the pending list or the whole feed.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate(
        &self,
        accounts: &[Account],
        transactions: &[Transaction],
        upcoming_bills: &[RecurringCharge],
        user_buffer: f64,
        horizon_days: i64,
        now: &DateTime<Utc>,
        calendar: &CalendarService,
    ) -> SafeToSpend {
        // Only checking counts as available now.
        let liquid_available: f64 = accounts
            .iter()
            .filter(|a| a.account_type.is_liquid())
            .map(|a| a.available_balance)
            .fold(0.0, |acc, x| acc + x);

        let pending_outflows: f64 = transactions
            .iter()
            .filter(|t| t.pending && t.is_outflow())
            .map(Transaction::magnitude)
            .fold(0.0, |acc, x| acc + x);

        let upcoming_essentials: f64 = upcoming_bills
            .iter()
            .filter(|b| {
                let days = calendar.days_until(b.next_date, now);
                (0..=horizon_days).contains(&days)
            })
            .map(|b| b.avg_amount)
            .fold(0.0, |acc, x| acc + x);

        let raw_amount = liquid_available - pending_outflows - upcoming_essentials - user_buffer;
        let amount = raw_amount.max(0.0);

        if raw_amount < 0.0 {
            warn!(shortfall = -raw_amount, "safe-to-spend clamped at zero: commitments exceed liquid funds");
        }
        debug!(
            liquid_available,
            pending_outflows,
            upcoming_essentials,
            user_buffer,
            amount,
            "computed safe-to-spend"
        );

        SafeToSpend {
            amount,
            horizon_days,
            breakdown: SafeToSpendBreakdown {
                liquid_available,
                pending_outflows,
                upcoming_essentials,
                user_buffer,
                raw_amount,
            },
        }
    }
}

impl Default for SafeToSpendService {
    fn default() -> Self {
        Self::new()
    }
}
