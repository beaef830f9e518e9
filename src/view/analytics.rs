//! Event analytics normalization.
//!
//! Builds the type-distribution pie and hourly-distribution bar view models
//! from the raw `/events/analytics` payload, plus the derived figures shown
//! alongside them: peak hour, hourly average, active hours, and the
//! severity distribution inferred from free-text type labels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::view::severity::{percentage, round_to};
use crate::view::{array_field, count_field, str_field, HourlyBucket, SeverityFilter};

/// The hourly bar chart always covers a full day.
pub const HOURS_PER_DAY: u64 = 24;

/// Default threshold for [`active_hours`].
pub const DEFAULT_ACTIVE_THRESHOLD: u64 = 1;

/// A pie chart slice: a typed count plus its share of the whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlice {
    /// Category name, `"Unknown"` when the backend omitted it.
    pub label: String,
    /// Events in this category.
    pub count: u64,
    /// Share of all pie entries, rounded to 1 decimal.
    pub percentage: f64,
}

/// Event counts bucketed into the three severities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityDistribution {
    /// Events whose label matched the critical keywords.
    pub critical: u64,
    /// Events whose label matched the warn keywords.
    pub warn: u64,
    /// Events whose label matched the info keywords.
    pub info: u64,
}

/// Build the type-distribution pie from `raw.type_pie`.
///
/// Each slice's percentage is computed against the sum of all entry counts.
/// Returns an empty list when `type_pie` is absent.
pub fn build_type_pie(raw: Option<&Value>) -> Vec<TypeSlice> {
    let entries = array_field(raw, "type_pie");
    let whole: u64 = entries.iter().map(|e| count_field(Some(e), "count")).sum();

    entries
        .iter()
        .map(|entry| {
            let count = count_field(Some(entry), "count");
            TypeSlice {
                label: str_field(Some(entry), "label").unwrap_or("Unknown").to_string(),
                count,
                percentage: percentage(count, whole),
            }
        })
        .collect()
}

/// Build the hourly bar chart from `raw.hourly_bar`.
///
/// Always returns exactly 24 buckets for hours 0-23 in order, regardless of
/// how complete or ordered the source is: the first source entry matching
/// each hour supplies its count, missing hours get 0. Chart rendering relies
/// on the fixed length.
pub fn build_hourly_bars(raw: Option<&Value>) -> Vec<HourlyBucket> {
    let entries = array_field(raw, "hourly_bar");

    (0..HOURS_PER_DAY as u8)
        .map(|hour| {
            let count = entries
                .iter()
                .find(|e| e.get("hour").and_then(Value::as_u64) == Some(hour as u64))
                .map(|e| count_field(Some(e), "count"))
                .unwrap_or(0);
            HourlyBucket { hour, count, label: hour_label(hour) }
        })
        .collect()
}

/// The bucket with the highest count, or `None` on empty input.
///
/// Ties resolve to the first occurrence, so with in-order input the lowest
/// hour wins.
pub fn peak_hour(buckets: &[HourlyBucket]) -> Option<HourlyBucket> {
    buckets
        .iter()
        .reduce(|best, bucket| if bucket.count > best.count { bucket } else { best })
        .cloned()
}

/// Accumulate `type_pie` counts into severity buckets by label keyword.
///
/// Labels are matched case-insensitively: "critical"/"danger" count as
/// critical, "warn" as warn, "info" as info. Entries matching none of the
/// keyword sets are dropped from the distribution (documented lossy
/// behavior, not a failure). A single-severity filter retains only the
/// selected bucket.
pub fn severity_distribution(raw: Option<&Value>, filter: SeverityFilter) -> SeverityDistribution {
    let mut distribution = SeverityDistribution::default();

    for entry in array_field(raw, "type_pie") {
        let label = str_field(Some(entry), "label").unwrap_or("");
        let count = count_field(Some(entry), "count");

        match classify_label(label) {
            Some(SeverityFilter::Critical) if matches!(filter, SeverityFilter::All | SeverityFilter::Critical) => {
                distribution.critical += count;
            }
            Some(SeverityFilter::Warn) if matches!(filter, SeverityFilter::All | SeverityFilter::Warn) => {
                distribution.warn += count;
            }
            Some(SeverityFilter::Info) if matches!(filter, SeverityFilter::All | SeverityFilter::Info) => {
                distribution.info += count;
            }
            _ => {}
        }
    }

    distribution
}

/// Classify a free-text type label into a severity by substring match.
///
/// Isolated here so an exact-enum scheme can replace the keyword matching
/// without touching callers.
fn classify_label(label: &str) -> Option<SeverityFilter> {
    let label = label.to_lowercase();
    if label.contains("critical") || label.contains("danger") {
        Some(SeverityFilter::Critical)
    } else if label.contains("warn") {
        Some(SeverityFilter::Warn)
    } else if label.contains("info") {
        Some(SeverityFilter::Info)
    } else {
        None
    }
}

/// Mean events per hour over the fixed 24-hour window, rounded to 2
/// decimals.
///
/// Divides by 24 even when fewer buckets are supplied; the average is
/// defined over the full day, not over the buckets present.
pub fn hourly_average(buckets: &[HourlyBucket]) -> f64 {
    let total: u64 = buckets.iter().map(|b| b.count).sum();
    round_to(total as f64 / HOURS_PER_DAY as f64, 2)
}

/// Buckets with `count >= threshold`, sorted descending by count.
///
/// The sort is stable, so equal counts keep their original hour order.
pub fn active_hours(buckets: &[HourlyBucket], threshold: u64) -> Vec<HourlyBucket> {
    let mut active: Vec<HourlyBucket> = buckets
        .iter()
        .filter(|b| b.count >= threshold)
        .cloned()
        .collect();
    active.sort_by(|a, b| b.count.cmp(&a.count));
    active
}

/// Zero-padded `"HH:00"` label for an hour of day.
fn hour_label(hour: u8) -> String {
    format!("{hour:02}:00")
}
