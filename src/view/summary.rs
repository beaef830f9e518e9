//! Event summary normalization.
//!
//! Converts the raw `/events/summary` payload into the complete view model
//! behind the dashboard's stat cards, and validates the date-range query
//! parameters every panel shares.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DateRangeError;
use crate::view::severity::{self, Trend};
use crate::view::{count_field, str_field, DateRange, SeverityCounts, SeverityFilter, NA};

/// Date format accepted by [`validate_date_range`].
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Complete summary view model for the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Total events in the range.
    pub total: u64,
    /// Critical events.
    pub critical: u64,
    /// Warning events.
    pub warn: u64,
    /// Informational events.
    pub info: u64,
    /// The range the counts cover.
    pub range: DateRange,
}

/// Normalize a raw summary payload into a complete [`EventSummary`].
///
/// Reads `counts.{total,critical,warn,info}` defaulting each missing field
/// to 0 and `range.{start,end}` defaulting to the `N/A` sentinel pair. An
/// absent payload, or one without a `counts` field, yields the all-zero
/// default object. Total function: there is no failure path.
pub fn normalize_summary(raw: Option<&Value>) -> EventSummary {
    let counts = raw.and_then(|v| v.get("counts"));
    if counts.is_none() {
        return EventSummary::default();
    }

    let range = raw.and_then(|v| v.get("range"));
    EventSummary {
        total: count_field(counts, "total"),
        critical: count_field(counts, "critical"),
        warn: count_field(counts, "warn"),
        info: count_field(counts, "info"),
        range: DateRange {
            start: str_field(range, "start").unwrap_or(NA).to_string(),
            end: str_field(range, "end").unwrap_or(NA).to_string(),
        },
    }
}

/// Validate a `start`/`end` query-parameter pair.
///
/// Fails with [`DateRangeError::MissingParameter`] when either is empty,
/// [`DateRangeError::InvalidFormat`] when not a `YYYY-MM-DD` date, and
/// [`DateRangeError::InvertedRange`] when start is after end.
pub fn validate_date_range(start: &str, end: &str) -> Result<(), DateRangeError> {
    if start.is_empty() || end.is_empty() {
        return Err(DateRangeError::MissingParameter);
    }

    let start_date = NaiveDate::parse_from_str(start, DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidFormat(start.to_string()))?;
    let end_date = NaiveDate::parse_from_str(end, DATE_FORMAT)
        .map_err(|_| DateRangeError::InvalidFormat(end.to_string()))?;

    if start_date > end_date {
        return Err(DateRangeError::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

/// Extract severity counts honoring a severity filter.
///
/// A single-severity filter returns counts with only that field populated
/// and `total` mirroring it; [`SeverityFilter::All`] returns the counts as
/// the backend reported them.
pub fn severity_stats_for(raw: Option<&Value>, filter: SeverityFilter) -> SeverityCounts {
    let counts = raw.and_then(|v| v.get("counts"));
    if counts.is_none() {
        return SeverityCounts::default();
    }

    match filter {
        SeverityFilter::All => SeverityCounts {
            total: count_field(counts, "total"),
            critical: count_field(counts, "critical"),
            warn: count_field(counts, "warn"),
            info: count_field(counts, "info"),
        },
        SeverityFilter::Critical => {
            let critical = count_field(counts, "critical");
            SeverityCounts { total: critical, critical, ..Default::default() }
        }
        SeverityFilter::Warn => {
            let warn = count_field(counts, "warn");
            SeverityCounts { total: warn, warn, ..Default::default() }
        }
        SeverityFilter::Info => {
            let info = count_field(counts, "info");
            SeverityCounts { total: info, info, ..Default::default() }
        }
    }
}

/// Trend between two normalized summaries, over their totals.
pub fn event_trend(current: &EventSummary, previous: &EventSummary) -> Trend {
    severity::trend(current.total, previous.total)
}
