//! Shared numeric helpers for severity math.
//!
//! Percentage and trend computation plus the fixed-threshold severity
//! classification used by the summary cards and the channel detail modal.

use serde::{Deserialize, Serialize};

/// Critical rate at or above which a channel is classified `high`.
pub const HIGH_CRITICAL_RATE: f64 = 30.0;
/// Critical rate at or above which a channel is classified `medium`.
pub const MEDIUM_CRITICAL_RATE: f64 = 10.0;
/// Warn rate at or above which a channel is classified `medium`.
pub const MEDIUM_WARN_RATE: f64 = 50.0;

/// Aggregate severity level derived from critical/warn rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Rates below every threshold.
    Normal,
    /// Elevated critical or warn rate.
    Medium,
    /// Critical rate at or above [`HIGH_CRITICAL_RATE`].
    High,
}

/// Change between two observation windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Absolute change, `current - previous`.
    pub delta: i64,
    /// Relative change in percent, rounded to 2 decimals.
    pub percentage: f64,
}

/// Round to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Share of `part` in `whole` as a percentage rounded to 1 decimal.
///
/// Returns 0 when `whole` is 0 so callers never hit a division by zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64 * 100.0, 1)
}

/// Classify a channel's severity level from its critical and warn rates.
pub fn classify_severity_level(critical_rate: f64, warn_rate: f64) -> SeverityLevel {
    if critical_rate >= HIGH_CRITICAL_RATE {
        SeverityLevel::High
    } else if critical_rate >= MEDIUM_CRITICAL_RATE || warn_rate >= MEDIUM_WARN_RATE {
        SeverityLevel::Medium
    } else {
        SeverityLevel::Normal
    }
}

/// Trend between a current and a previous total.
///
/// A previous total of 0 yields 100% when there is new activity and 0%
/// otherwise, signalling "new activity" without dividing by zero.
pub fn trend(current: u64, previous: u64) -> Trend {
    let delta = current as i64 - previous as i64;
    let percentage = if previous == 0 {
        if current > 0 {
            100.0
        } else {
            0.0
        }
    } else {
        round_to(delta as f64 / previous as f64 * 100.0, 2)
    };
    Trend { delta, percentage }
}
