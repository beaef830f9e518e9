//! Channel grid normalization.
//!
//! Builds the channel grid view model from the raw `/channels` payload and
//! provides the summary, ranking, and filtering operations the grid panel
//! exposes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DashboardError, Result};
use crate::view::severity::{percentage, round_to};
use crate::view::{
    array_field, count_field, id_field, str_field, typed_counts, TypedCount, PLACEHOLDER_LOCATION,
};

/// Default number of channels returned by [`top_active`].
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Channel ids are expected in this inclusive range (or the literal `all`).
const CHANNEL_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=999;

/// One cell of the channel grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Stable channel identifier: a stringified number, the literal
    /// `"all"`, or empty when the backend omitted it.
    pub channel_id: String,
    /// Display name, defaulting to the `"CHnn"` form.
    pub name: String,
    /// Total events for this channel in the range.
    pub total_events: u64,
    /// Uppercased status string (`ON`, `OFF`, `MAINTENANCE`, `ERROR`).
    pub status: String,
    /// Per-type event breakdown.
    pub by_type: Vec<TypedCount>,
    /// Installed location, placeholder when unknown.
    pub location_name: String,
}

/// Aggregate on/off statistics for the grid header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelStatusSummary {
    /// Channel count.
    pub total: u64,
    /// Channels with status `ON`.
    pub online: u64,
    /// Everything else.
    pub offline: u64,
    /// `online / total` as a percentage rounded to 1 decimal.
    pub online_rate: f64,
}

/// Aggregate event statistics across channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDistribution {
    /// Sum of all channel event counts.
    pub total_events: u64,
    /// Mean events per channel, rounded to 2 decimals.
    pub avg_per_channel: f64,
    /// Highest single-channel count.
    pub max_events: u64,
    /// Lowest single-channel count.
    pub min_events: u64,
}

/// `"CH"` plus the id zero-padded to at least two digits.
///
/// Non-numeric ids longer than two characters (like `"all"`) pass through
/// unpadded.
pub fn channel_display(channel_id: &str) -> String {
    format!("CH{channel_id:0>2}")
}

/// Build the channel grid from `raw.items`.
///
/// Each item is defaulted per field: `name` to the `"CHnn"` form, `status`
/// to `OFF` (always uppercased), `by_type` to an empty list, and
/// `location_name` to the placeholder. The result is sorted ascending by
/// numeric channel id; non-numeric or missing ids sort as 0 without being
/// mutated. Returns an empty grid when `raw` or `items` is absent.
pub fn build_channel_grid(raw: Option<&Value>) -> Vec<ChannelSummary> {
    let mut channels: Vec<ChannelSummary> = array_field(raw, "items")
        .iter()
        .map(|item| {
            let channel_id = id_field(Some(item), "channel_id").unwrap_or_default();
            ChannelSummary {
                name: str_field(Some(item), "name")
                    .map(str::to_string)
                    .unwrap_or_else(|| channel_display(&channel_id)),
                total_events: count_field(Some(item), "count"),
                status: str_field(Some(item), "status").unwrap_or("OFF").to_uppercase(),
                by_type: typed_counts(array_field(Some(item), "by_type")),
                location_name: str_field(Some(item), "location_name")
                    .unwrap_or(PLACEHOLDER_LOCATION)
                    .to_string(),
                channel_id,
            }
        })
        .collect();

    channels.sort_by_key(|ch| ch.channel_id.parse::<i64>().unwrap_or(0));
    channels
}

/// On/off summary over a grid.
pub fn status_summary(channels: &[ChannelSummary]) -> ChannelStatusSummary {
    let total = channels.len() as u64;
    let online = channels
        .iter()
        .filter(|ch| ch.status.eq_ignore_ascii_case("ON"))
        .count() as u64;

    ChannelStatusSummary {
        total,
        online,
        offline: total - online,
        online_rate: percentage(online, total),
    }
}

/// The `limit` most active channels, descending by event count.
pub fn top_active(channels: &[ChannelSummary], limit: usize) -> Vec<ChannelSummary> {
    let mut ranked = channels.to_vec();
    ranked.sort_by(|a, b| b.total_events.cmp(&a.total_events));
    ranked.truncate(limit);
    ranked
}

/// Aggregate event statistics over a grid; all zero when empty.
pub fn event_distribution(channels: &[ChannelSummary]) -> EventDistribution {
    if channels.is_empty() {
        return EventDistribution::default();
    }

    let counts: Vec<u64> = channels.iter().map(|ch| ch.total_events).collect();
    let total_events: u64 = counts.iter().sum();

    EventDistribution {
        total_events,
        avg_per_channel: round_to(total_events as f64 / channels.len() as f64, 2),
        max_events: counts.iter().copied().max().unwrap_or(0),
        min_events: counts.iter().copied().min().unwrap_or(0),
    }
}

/// Channels whose status matches `filter` exactly (case-insensitive);
/// `"all"` passes everything through.
pub fn filter_by_status(channels: &[ChannelSummary], filter: &str) -> Vec<ChannelSummary> {
    if filter.eq_ignore_ascii_case("all") {
        return channels.to_vec();
    }
    channels
        .iter()
        .filter(|ch| ch.status.eq_ignore_ascii_case(filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring search across channel id, name, and location.
///
/// An empty term returns the input unchanged.
pub fn search(channels: &[ChannelSummary], term: &str) -> Vec<ChannelSummary> {
    if term.is_empty() {
        return channels.to_vec();
    }

    let term = term.to_lowercase();
    channels
        .iter()
        .filter(|ch| {
            ch.channel_id.to_lowercase().contains(&term)
                || ch.name.to_lowercase().contains(&term)
                || ch.location_name.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Channels with `min <= total_events <= max`; a `None` max is unbounded
/// above.
pub fn filter_by_event_count(
    channels: &[ChannelSummary],
    min: u64,
    max: Option<u64>,
) -> Vec<ChannelSummary> {
    channels
        .iter()
        .filter(|ch| ch.total_events >= min && max.map_or(true, |m| ch.total_events <= m))
        .cloned()
        .collect()
}

/// Validate a channel id path parameter: the literal `"all"` or an integer
/// in 1-999.
pub fn validate_channel_id(channel_id: &str) -> Result<()> {
    if channel_id == "all" {
        return Ok(());
    }
    match channel_id.parse::<i64>() {
        Ok(id) if CHANNEL_ID_RANGE.contains(&id) => Ok(()),
        _ => Err(DashboardError::InvalidChannelId(channel_id.to_string())),
    }
}
