//! Display-ready view models for the NVR dashboard
//!
//! This module is the core of nvrdash: a set of pure normalization functions
//! that take heterogeneous, partially-missing backend JSON and produce
//! complete, default-filled, sorted, and derived view models for summary
//! cards, charts, and the channel grid.
//!
//! Submodules map one-to-one onto the dashboard panels:
//!
//! - [`severity`]: shared numeric helpers (percentages, trends, thresholds)
//! - [`summary`]: event summary cards and date-range validation
//! - [`analytics`]: type-distribution pie and hourly-distribution bar charts
//! - [`channels`]: the channel grid, status summary, ranking, and filters
//! - [`detail`]: per-channel detail modals with location/marker data
//! - [`colors`]: severity/status color and icon tokens for rendering
//!
//! Every function here is total over its raw input: missing or mistyped
//! optional fields degrade to documented defaults instead of failing, so the
//! HTTP layer can hand over whatever the backend returned (or `None` when
//! the fetch produced nothing usable) and always get a renderable view model
//! back. Raw payloads are consumed as [`serde_json::Value`] for exactly this
//! reason. No function performs I/O or retains state across calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod analytics;
pub mod channels;
pub mod colors;
pub mod detail;
pub mod severity;
pub mod summary;

/// Sentinel used for both ends of a date range when the backend omits it.
pub const NA: &str = "N/A";

/// Placeholder shown for missing location strings.
///
/// The frontend string-matches this value, so it must be reproduced exactly.
pub const PLACEHOLDER_LOCATION: &str = "정보 없음";

/// Event counts broken down by severity.
///
/// `total` is informational only: producers copy it from the backend (or
/// mirror a filtered field into it) without enforcing that it equals
/// `critical + warn + info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Total events in the range.
    pub total: u64,
    /// Critical events.
    pub critical: u64,
    /// Warning events.
    pub warn: u64,
    /// Informational events.
    pub info: u64,
}

/// A calendar date range in `YYYY-MM-DD` form, or the `N/A` sentinel pair
/// when the backend supplied none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start date.
    pub start: String,
    /// Range end date.
    pub end: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NA.to_string(),
            end: NA.to_string(),
        }
    }
}

/// A free-text category label with its event count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedCount {
    /// Category name.
    pub label: String,
    /// Events in this category.
    pub count: u64,
}

/// A single hour-of-day bucket for the hourly bar chart.
///
/// Producers guarantee `hour` is in `0..=23` and `label` is the zero-padded
/// `"HH:00"` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Events observed in this hour.
    pub count: u64,
    /// Display label, `"HH:00"`.
    pub label: String,
}

/// Severity filter accepted as a query parameter.
///
/// Unrecognized values fall back to [`SeverityFilter::All`], matching the
/// lenient treatment of every other optional input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityFilter {
    /// No filtering.
    #[default]
    All,
    /// Critical events only.
    Critical,
    /// Warning events only.
    Warn,
    /// Informational events only.
    Info,
}

impl SeverityFilter {
    /// Parse a query-string value; anything unrecognized means `All`.
    pub fn from_param(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "warn" => Self::Warn,
            "info" => Self::Info,
            _ => Self::All,
        }
    }

    /// The wire form passed through to the backend API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Critical => "critical",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient field access over raw backend JSON
// ---------------------------------------------------------------------------

/// Read a numeric field as a count, treating missing, null, negative, or
/// non-numeric values as 0. Accepts both integer and float encodings.
pub(crate) fn count_field(value: Option<&Value>, key: &str) -> u64 {
    value
        .and_then(|v| v.get(key))
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
        .unwrap_or(0)
}

/// Read a string field, or `None` when missing or not a string.
pub(crate) fn str_field<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a str> {
    value.and_then(|v| v.get(key)).and_then(Value::as_str)
}

/// Stringify an id field: string ids pass through, numeric ids are
/// formatted, anything else is `None`.
pub(crate) fn id_field(value: Option<&Value>, key: &str) -> Option<String> {
    match value.and_then(|v| v.get(key)) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Read an array field as a slice, or an empty slice when missing or not an
/// array.
pub(crate) fn array_field<'a>(value: Option<&'a Value>, key: &str) -> &'a [Value] {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Parse a `[{label, count}]` breakdown list, defaulting labels to
/// `"Unknown"` (with a `type_name` fallback some backend versions emit) and
/// counts to 0.
pub(crate) fn typed_counts(entries: &[Value]) -> Vec<TypedCount> {
    entries
        .iter()
        .map(|entry| TypedCount {
            label: str_field(Some(entry), "label")
                .or_else(|| str_field(Some(entry), "type_name"))
                .unwrap_or("Unknown")
                .to_string(),
            count: count_field(Some(entry), "count"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_range_default_is_na_pair() {
        let range = DateRange::default();
        assert_eq!(range.start, "N/A");
        assert_eq!(range.end, "N/A");
    }

    #[test]
    fn test_severity_filter_from_param() {
        assert_eq!(SeverityFilter::from_param("critical"), SeverityFilter::Critical);
        assert_eq!(SeverityFilter::from_param("WARN"), SeverityFilter::Warn);
        assert_eq!(SeverityFilter::from_param("info"), SeverityFilter::Info);
        assert_eq!(SeverityFilter::from_param("all"), SeverityFilter::All);
        assert_eq!(SeverityFilter::from_param("bogus"), SeverityFilter::All);
        assert_eq!(SeverityFilter::from_param(""), SeverityFilter::All);
    }

    #[test]
    fn test_count_field_lenient() {
        let raw = json!({"a": 3, "b": 2.9, "c": -5, "d": "many", "e": null});
        assert_eq!(count_field(Some(&raw), "a"), 3);
        assert_eq!(count_field(Some(&raw), "b"), 2);
        assert_eq!(count_field(Some(&raw), "c"), 0);
        assert_eq!(count_field(Some(&raw), "d"), 0);
        assert_eq!(count_field(Some(&raw), "e"), 0);
        assert_eq!(count_field(Some(&raw), "missing"), 0);
        assert_eq!(count_field(None, "a"), 0);
    }

    #[test]
    fn test_id_field_stringifies_numbers() {
        let raw = json!({"num": 7, "text": "all", "weird": [1]});
        assert_eq!(id_field(Some(&raw), "num"), Some("7".to_string()));
        assert_eq!(id_field(Some(&raw), "text"), Some("all".to_string()));
        assert_eq!(id_field(Some(&raw), "weird"), None);
        assert_eq!(id_field(Some(&raw), "missing"), None);
    }

    #[test]
    fn test_typed_counts_label_fallbacks() {
        let entries = [
            json!({"label": "intrusion", "count": 4}),
            json!({"type_name": "loitering", "count": 2}),
            json!({"count": 1}),
        ];
        let parsed = typed_counts(&entries);
        assert_eq!(parsed[0].label, "intrusion");
        assert_eq!(parsed[1].label, "loitering");
        assert_eq!(parsed[2].label, "Unknown");
        assert_eq!(parsed[2].count, 1);
    }
}
