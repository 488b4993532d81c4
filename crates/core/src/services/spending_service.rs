use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::spending::{CategoryShare, MerchantTotal, SpendingAggregate, SpendingFilter, TrendDelta};
use crate::models::transaction::{Direction, Transaction};
use crate::models::window::DateWindow;
use crate::services::calendar_service::CalendarService;
use crate::services::category_service::CategoryService;

/// Merchant label for transactions the source left unnamed.
const UNKNOWN_MERCHANT: &str = "Unknown";

/// Groups transactions by category and by time bucket.
///
/// Direction is always taken from [`Transaction::direction`], and amounts are
/// aggregated by magnitude, so signed legacy rows and explicit-direction rows
/// total the same way.
pub struct SpendingService {
    category_service: CategoryService,
}

impl SpendingService {
    pub fn new() -> Self {
        Self {
            category_service: CategoryService::new(),
        }
    }

    /// Totals for the transactions matching `filter`.
    ///
    /// Each matching transaction adds its magnitude to exactly one category,
    /// exactly one bucket and the total, so both maps partition the total.
    pub fn aggregate(
        &self,
        transactions: &[Transaction],
        filter: &SpendingFilter,
        calendar: &CalendarService,
    ) -> SpendingAggregate {
        let mut aggregate = SpendingAggregate::empty(*filter);

        for tx in transactions {
            if tx.direction() != filter.direction {
                continue;
            }
            let day = calendar.local_day(&tx.posted_date);
            if !filter.window.contains(day) {
                continue;
            }

            let amount = tx.magnitude();
            let category = self.category_service.resolve(tx.raw_category.as_deref());
            *aggregate
                .by_category
                .entry(category.display_name.clone())
                .or_insert(0.0) += amount;
            aggregate
                .category_colors
                .entry(category.display_name)
                .or_insert(category.color);
            *aggregate
                .by_bucket
                .entry(calendar.day_bucket_key(day, filter.granularity))
                .or_insert(0.0) += amount;
            aggregate.total += amount;
            aggregate.transaction_count += 1;
        }

        debug!(
            direction = %filter.direction,
            start = %filter.window.start(),
            end = %filter.window.end(),
            total = aggregate.total,
            count = aggregate.transaction_count,
            "aggregated transactions"
        );
        aggregate
    }

    /// Sum of matching magnitudes without the per-category breakdown.
    pub fn total(
        &self,
        transactions: &[Transaction],
        window: &DateWindow,
        direction: Direction,
        calendar: &CalendarService,
    ) -> f64 {
        transactions
            .iter()
            .filter(|tx| tx.direction() == direction && calendar.in_window(&tx.posted_date, window))
            .map(Transaction::magnitude)
            .fold(0.0, |acc, x| acc + x)
    }

    /// Category breakdown as percentages of the total, largest first.
    ///
    /// Empty when the total is zero, so no slice ever carries NaN.
    pub fn category_shares(&self, aggregate: &SpendingAggregate) -> Vec<CategoryShare> {
        if aggregate.total <= 0.0 {
            return Vec::new();
        }

        let mut shares: Vec<CategoryShare> = aggregate
            .by_category
            .iter()
            .map(|(name, amount)| CategoryShare {
                name: name.clone(),
                color: aggregate
                    .category_colors
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| self.category_service.resolve(Some(name)).color),
                amount: *amount,
                percent: amount / aggregate.total * 100.0,
            })
            .collect();

        shares.sort_by(|a, b| b.amount.total_cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        shares
    }

    /// Merchants ranked by total amount within `filter`, capped at `limit`.
    pub fn top_merchants(
        &self,
        transactions: &[Transaction],
        filter: &SpendingFilter,
        calendar: &CalendarService,
        limit: usize,
    ) -> Vec<MerchantTotal> {
        let mut by_merchant: HashMap<&str, (f64, usize)> = HashMap::new();
        for tx in transactions {
            if tx.direction() != filter.direction || !calendar.in_window(&tx.posted_date, &filter.window) {
                continue;
            }
            let merchant = match tx.merchant_name.trim() {
                "" => UNKNOWN_MERCHANT,
                name => name,
            };
            let entry = by_merchant.entry(merchant).or_insert((0.0, 0));
            entry.0 += tx.magnitude();
            entry.1 += 1;
        }

        let mut merchants: Vec<MerchantTotal> = by_merchant
            .into_iter()
            .map(|(merchant, (amount, count))| MerchantTotal {
                merchant: merchant.to_string(),
                amount,
                transaction_count: count,
            })
            .collect();
        merchants.sort_by(|a, b| b.amount.total_cmp(&a.amount).then_with(|| a.merchant.cmp(&b.merchant)));
        merchants.truncate(limit);
        merchants
    }

    /// Compare `current` with the equal-length window right before it.
    pub fn trend(
        &self,
        transactions: &[Transaction],
        current: DateWindow,
        direction: Direction,
        calendar: &CalendarService,
    ) -> TrendDelta {
        let previous = current.preceding();
        let current_total = self.total(transactions, &current, direction, calendar);
        let previous_total = self.total(transactions, &previous, direction, calendar);
        let change = trend_delta(current_total, previous_total);

        TrendDelta {
            current_window: current,
            previous_window: previous,
            current: current_total,
            previous: previous_total,
            change,
            change_pct: change * 100.0,
        }
    }

    /// Spending in this Monday-start week versus last week.
    ///
    /// The current window runs through Sunday, so mid-week it includes days
    /// that have not happened yet.
    pub fn week_over_week(
        &self,
        transactions: &[Transaction],
        now: &DateTime<Utc>,
        calendar: &CalendarService,
    ) -> TrendDelta {
        let this_week = calendar.week_window(calendar.local_day(now));
        self.trend(transactions, this_week, Direction::Outflow, calendar)
    }
}

impl Default for SpendingService {
    fn default() -> Self {
        Self::new()
    }
}

/// `(current - previous) / previous`, or `0` when there is no previous spend.
pub fn trend_delta(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous
    }
}
