use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::transaction::Direction;
use super::window::{BucketGranularity, DateWindow};

/// Which transactions an aggregation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingFilter {
    pub window: DateWindow,
    pub direction: Direction,
    #[serde(default)]
    pub granularity: BucketGranularity,
}

impl SpendingFilter {
    pub fn new(window: DateWindow, direction: Direction) -> Self {
        Self {
            window,
            direction,
            granularity: BucketGranularity::Day,
        }
    }

    /// Spending: money leaving within `window`.
    pub fn outflows(window: DateWindow) -> Self {
        Self::new(window, Direction::Outflow)
    }

    /// Income: money arriving within `window`.
    pub fn inflows(window: DateWindow) -> Self {
        Self::new(window, Direction::Inflow)
    }

    pub fn with_granularity(mut self, granularity: BucketGranularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// Totals for one filter window.
///
/// `by_category` and `by_bucket` each partition `total`: every matching
/// transaction lands in exactly one category and exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAggregate {
    pub filter: SpendingFilter,

    /// Sum of absolute amounts of matching transactions
    pub total: f64,

    pub transaction_count: usize,

    /// Display name → amount
    pub by_category: BTreeMap<String, f64>,

    /// Display name → color token
    pub category_colors: BTreeMap<String, String>,

    /// Bucket key → amount
    pub by_bucket: BTreeMap<String, f64>,
}

impl SpendingAggregate {
    pub fn empty(filter: SpendingFilter) -> Self {
        Self {
            filter,
            total: 0.0,
            transaction_count: 0,
            by_category: BTreeMap::new(),
            category_colors: BTreeMap::new(),
            by_bucket: BTreeMap::new(),
        }
    }

    /// Amount for a category display name, `0` if nothing matched.
    pub fn category_amount(&self, name: &str) -> f64 {
        self.by_category.get(name).copied().unwrap_or(0.0)
    }
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    pub color: String,
    pub amount: f64,
    /// Share of the window total, 0–100
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantTotal {
    pub merchant: String,
    pub amount: f64,
    pub transaction_count: usize,
}

/// Change between two equal-length adjacent windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDelta {
    pub current_window: DateWindow,
    pub previous_window: DateWindow,
    pub current: f64,
    pub previous: f64,
    /// `(current - previous) / previous`, `0` when `previous == 0`
    pub change: f64,
    /// `change` expressed in percent
    pub change_pct: f64,
}
