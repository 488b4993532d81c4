use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};

use crate::errors::CoreError;
use crate::models::window::{BucketGranularity, DateWindow};

/// Maps instants onto the user's local calendar.
///
/// Every comparison goes through [`CalendarService::local_day`] first, so two
/// timestamps on the same local day always key, range and bucket the same way
/// whatever their time of day. Weeks start on Monday everywhere.
#[derive(Debug, Clone, Copy)]
pub struct CalendarService {
    offset: FixedOffset,
}

impl CalendarService {
    /// Calendar in UTC.
    pub fn new() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Calendar shifted `minutes` east of UTC (negative for the Americas).
    pub fn with_offset_minutes(minutes: i32) -> Result<Self, CoreError> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(CoreError::InvalidUtcOffset(minutes))?;
        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The local calendar day containing `instant` (local midnight key).
    pub fn local_day(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// First day of the bucket containing `day`.
    pub fn bucket_start(&self, day: NaiveDate, granularity: BucketGranularity) -> NaiveDate {
        match granularity {
            BucketGranularity::Day => day,
            BucketGranularity::Week => week_start(day),
            BucketGranularity::Month => day.with_day(1).unwrap_or(day),
        }
    }

    /// Stable string key for the bucket containing `day`.
    ///
    /// Day and week keys are `YYYY-MM-DD` (the Monday, for weeks); month keys
    /// are `YYYY-MM`.
    pub fn day_bucket_key(&self, day: NaiveDate, granularity: BucketGranularity) -> String {
        let start = self.bucket_start(day, granularity);
        match granularity {
            BucketGranularity::Day | BucketGranularity::Week => start.format("%Y-%m-%d").to_string(),
            BucketGranularity::Month => start.format("%Y-%m").to_string(),
        }
    }

    pub fn bucket_key(&self, instant: &DateTime<Utc>, granularity: BucketGranularity) -> String {
        self.day_bucket_key(self.local_day(instant), granularity)
    }

    /// Whether `instant` falls on a local day inside `[start, end]`.
    pub fn in_range(&self, instant: &DateTime<Utc>, start: NaiveDate, end: NaiveDate) -> bool {
        let day = self.local_day(instant);
        day >= start && day <= end
    }

    pub fn in_window(&self, instant: &DateTime<Utc>, window: &DateWindow) -> bool {
        window.contains(self.local_day(instant))
    }

    /// Whole days from today to `target`; negative when `target` has passed.
    pub fn days_until(&self, target: NaiveDate, now: &DateTime<Utc>) -> i64 {
        (target - self.local_day(now)).num_days()
    }

    /// Monday-to-Sunday week containing `day`.
    pub fn week_window(&self, day: NaiveDate) -> DateWindow {
        let start = week_start(day);
        DateWindow::new(start, start + Duration::days(6)).unwrap_or_else(|_| DateWindow::single_day(day))
    }

    /// Calendar month containing `day`.
    pub fn month_window(&self, day: NaiveDate) -> DateWindow {
        let start = day.with_day(1).unwrap_or(day);
        let end = start + Duration::days(days_in_month(day.year(), day.month()) - 1);
        DateWindow::new(start, end).unwrap_or_else(|_| DateWindow::single_day(day))
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> i64 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days(),
        _ => 30,
    }
}
