use tracing::debug;

use crate::models::settings::UserSettings;
use crate::models::transaction::Transaction;
use crate::models::window::DateWindow;
use crate::services::calendar_service::CalendarService;

/// Spare change between each purchase and the next whole currency unit.
pub struct RoundUpService;

impl RoundUpService {
    pub fn new() -> Self {
        Self
    }

    /// Round-up for one amount, scaled by `multiplier`. Whole amounts give `0`.
    ///
    /// Worked in integer cents so `4.10` rounds up by exactly `0.90`.
    pub fn round_up(&self, amount: f64, multiplier: f64) -> f64 {
        let cents = (amount.abs() * 100.0).round() as i64;
        let remainder = cents % 100;
        if remainder == 0 {
            return 0.0;
        }
        (100 - remainder) as f64 / 100.0 * multiplier
    }

    /// Round-ups from settled outflows inside `window`; `0` when disabled.
    pub fn total(
        &self,
        transactions: &[Transaction],
        settings: &UserSettings,
        window: &DateWindow,
        calendar: &CalendarService,
    ) -> f64 {
        if !settings.round_up_enabled {
            return 0.0;
        }
        let total = transactions
            .iter()
            .filter(|t| !t.pending && t.is_outflow() && calendar.in_window(&t.posted_date, window))
            .map(|t| self.round_up(t.magnitude(), settings.round_up_multiplier))
            .fold(0.0, |acc, x| acc + x);
        debug!(total, multiplier = settings.round_up_multiplier, "computed round-ups");
        total
    }
}

impl Default for RoundUpService {
    fn default() -> Self {
        Self::new()
    }
}
