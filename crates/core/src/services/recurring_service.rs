use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

use crate::models::bill::{Cadence, RecurringCharge, UpcomingBill};
use crate::services::calendar_service::CalendarService;
use crate::services::category_service::CategoryService;

/// Cadence arithmetic for recurring charges.
pub struct RecurringService {
    category_service: CategoryService,
}

impl RecurringService {
    pub fn new() -> Self {
        Self {
            category_service: CategoryService::new(),
        }
    }

    /// The occurrence after `date` for the given cadence.
    ///
    /// Month steps clamp to the end of short months (Jan 31 → Feb 28).
    pub fn advance(&self, date: NaiveDate, cadence: Cadence) -> NaiveDate {
        match cadence {
            Cadence::Weekly => date + Duration::days(7),
            Cadence::Biweekly => date + Duration::days(14),
            Cadence::Monthly => date.checked_add_months(Months::new(1)).unwrap_or(date),
            Cadence::Yearly => date.checked_add_months(Months::new(12)).unwrap_or(date),
        }
    }

    /// First occurrence on or after `on_or_after`, starting from `next_date`.
    pub fn next_occurrence(&self, bill: &RecurringCharge, on_or_after: NaiveDate) -> NaiveDate {
        let mut date = bill.next_date;
        let mut steps: u32 = 0;
        while date < on_or_after {
            steps += 1;
            let next = match bill.cadence {
                // Step from the anchor so a 31st doesn't drift to the 28th forever.
                Cadence::Monthly => bill.next_date.checked_add_months(Months::new(steps)),
                Cadence::Yearly => bill.next_date.checked_add_months(Months::new(12 * steps)),
                Cadence::Weekly | Cadence::Biweekly => Some(self.advance(date, bill.cadence)),
            };
            match next {
                Some(next) if next > date => date = next,
                _ => break,
            }
        }
        date
    }

    /// Average cost per month of a bill, whatever its cadence.
    pub fn monthly_equivalent(&self, bill: &RecurringCharge) -> f64 {
        bill.avg_amount * bill.cadence.occurrences_per_year() / 12.0
    }

    /// Total monthly cost of all recurring charges.
    pub fn monthly_total(&self, bills: &[RecurringCharge]) -> f64 {
        bills
            .iter()
            .map(|b| self.monthly_equivalent(b))
            .fold(0.0, |acc, x| acc + x)
    }

    /// Bills due within `[0, horizon_days]` days of today, soonest first.
    pub fn upcoming(
        &self,
        bills: &[RecurringCharge],
        horizon_days: i64,
        now: &DateTime<Utc>,
        calendar: &CalendarService,
    ) -> Vec<UpcomingBill> {
        let mut upcoming: Vec<UpcomingBill> = bills
            .iter()
            .filter_map(|bill| {
                let days_until = calendar.days_until(bill.next_date, now);
                if !(0..=horizon_days).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBill {
                    bill_id: bill.id.clone(),
                    merchant: bill.merchant.clone(),
                    due_date: bill.next_date,
                    days_until,
                    amount: bill.avg_amount,
                    category: self.category_service.resolve(bill.raw_category.as_deref()),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.days_until.cmp(&b.days_until).then_with(|| a.merchant.cmp(&b.merchant)));
        upcoming
    }
}

impl Default for RecurringService {
    fn default() -> Self {
        Self::new()
    }
}
