use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Preferences supplied by the settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Reserve subtracted before computing Safe-to-Spend
    pub user_buffer: f64,

    /// Whether spare change from purchases is swept into savings
    pub round_up_enabled: bool,

    /// Multiplier applied to each round-up (1 = plain spare change)
    pub round_up_multiplier: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_buffer: 0.0,
            round_up_enabled: false,
            round_up_multiplier: 1.0,
        }
    }
}

/// Default look-ahead for bills counted against Safe-to-Spend.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// Default assumed annual return for projections.
pub const DEFAULT_ANNUAL_RETURN_PCT: f64 = 7.0;

/// Longest offset any real time zone uses.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Policy constants behind user-visible labels.
///
/// Defaults match the labels the dashboard has always shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Bills due within this many days count against Safe-to-Spend
    pub safe_to_spend_horizon_days: i64,

    /// Points above expected progress still considered on track
    pub pace_tolerance_pct: f64,

    /// Overspend beyond this percentage of expected spend is "over"
    pub pace_warning_limit_pct: f64,

    /// Category progress at or above this is "near limit"
    pub near_limit_pct: f64,

    /// Due within this many days is urgent
    pub urgent_within_days: i64,

    /// Due within this many days is soon
    pub soon_within_days: i64,

    /// Window used for the cost-of-waiting nudge
    pub cost_of_waiting_days: u32,

    /// Annual return assumed by growth projections
    pub default_annual_return_pct: f64,

    /// Offset of the user's local calendar from UTC
    pub utc_offset_minutes: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            safe_to_spend_horizon_days: DEFAULT_HORIZON_DAYS,
            pace_tolerance_pct: 5.0,
            pace_warning_limit_pct: 20.0,
            near_limit_pct: 80.0,
            urgent_within_days: 3,
            soon_within_days: 7,
            cost_of_waiting_days: 7,
            default_annual_return_pct: DEFAULT_ANNUAL_RETURN_PCT,
            utc_offset_minutes: 0,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let percentages = [
            ("paceTolerancePct", self.pace_tolerance_pct),
            ("paceWarningLimitPct", self.pace_warning_limit_pct),
            ("nearLimitPct", self.near_limit_pct),
            ("defaultAnnualReturnPct", self.default_annual_return_pct),
        ];
        for (name, value) in percentages {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self.safe_to_spend_horizon_days < 0 {
            return Err(CoreError::InvalidConfig(format!(
                "safeToSpendHorizonDays must not be negative (got {})",
                self.safe_to_spend_horizon_days
            )));
        }
        if self.urgent_within_days > self.soon_within_days {
            return Err(CoreError::InvalidConfig(format!(
                "urgentWithinDays ({}) must not exceed soonWithinDays ({})",
                self.urgent_within_days, self.soon_within_days
            )));
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(CoreError::InvalidUtcOffset(self.utc_offset_minutes));
        }
        Ok(())
    }
}
