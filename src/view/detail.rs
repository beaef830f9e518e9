//! Channel detail normalization.
//!
//! Builds the per-channel detail modal view model: identity, counts,
//! per-type breakdown, location info with an optional map marker, and the
//! derived severity summary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::view::channels::channel_display;
use crate::view::severity::{classify_severity_level, percentage, SeverityLevel};
use crate::view::{
    array_field, count_field, id_field, str_field, typed_counts, DateRange, SeverityCounts,
    TypedCount, PLACEHOLDER_LOCATION, NA,
};

/// Percentage coordinates for placing a camera marker over the E-MAP image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal position, 0-100.
    #[serde(default)]
    pub x: f64,
    /// Vertical position, 0-100.
    #[serde(default)]
    pub y: f64,
}

/// Location block of the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Installed equipment name, placeholder when unknown.
    pub fov_location_name: String,
    /// Process/area name, placeholder when unknown.
    pub area_name: String,
    /// E-MAP image URL, if any.
    pub emap_image_url: Option<String>,
    /// FOV thumbnail URL, if any.
    pub fov_thumbnail_url: Option<String>,
    /// Marker position over the E-MAP, if any.
    pub position: Option<Position>,
}

/// Complete view model for a single channel's detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetail {
    /// Stable channel identifier.
    pub channel_id: String,
    /// Display name.
    pub name: String,
    /// `"CHnn"` display form, always derived from the id.
    pub channel_display: String,
    /// Event counts by severity.
    pub counts: SeverityCounts,
    /// Per-type event breakdown.
    pub by_type: Vec<TypedCount>,
    /// Status string as the backend reported it, `OFF` when absent.
    pub status: String,
    /// Location block.
    pub location_info: LocationInfo,
    /// The range the counts cover.
    pub range: DateRange,
}

/// CSS-ready placement for the camera marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// CSS `left` percentage.
    pub left: String,
    /// CSS `top` percentage.
    pub top: String,
    /// Marker class list, `"camera-marker status-<status>"`.
    pub class: String,
}

/// Severity rates and classification for the detail modal header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSeveritySummary {
    /// Critical share of total, rounded to 1 decimal.
    pub critical_rate: f64,
    /// Warn share of total.
    pub warn_rate: f64,
    /// Info share of total.
    pub info_rate: f64,
    /// Classified severity level.
    pub severity_level: SeverityLevel,
}

/// The canonical empty detail for a channel with no data.
///
/// A pure constructor returning a fresh value per call; the UI depends on
/// the exact placeholder text, so the output must be reproducible
/// byte-for-byte.
pub fn empty_detail(channel_id: &str) -> ChannelDetail {
    ChannelDetail {
        channel_id: channel_id.to_string(),
        name: channel_display(channel_id),
        channel_display: channel_display(channel_id),
        counts: SeverityCounts::default(),
        by_type: Vec::new(),
        status: "OFF".to_string(),
        location_info: LocationInfo {
            fov_location_name: PLACEHOLDER_LOCATION.to_string(),
            area_name: PLACEHOLDER_LOCATION.to_string(),
            emap_image_url: None,
            fov_thumbnail_url: None,
            position: None,
        },
        range: DateRange { start: NA.to_string(), end: NA.to_string() },
    }
}

/// Build a channel's detail view model from the raw `/channels/{id}`
/// payload.
///
/// An absent, null, or empty payload yields [`empty_detail`]. A present
/// payload is defaulted field by field, never all-or-nothing: each count,
/// string, and location entry falls back independently.
pub fn build_detail(raw: Option<&Value>, channel_id: &str) -> ChannelDetail {
    let raw = match raw {
        Some(v) if !v.is_null() && v.as_object().map_or(true, |o| !o.is_empty()) => v,
        _ => return empty_detail(channel_id),
    };

    let id = id_field(Some(raw), "channel_id").unwrap_or_else(|| channel_id.to_string());
    let counts = raw.get("counts");
    let range = raw.get("range");

    ChannelDetail {
        name: str_field(Some(raw), "name")
            .map(str::to_string)
            .unwrap_or_else(|| channel_display(&id)),
        channel_display: channel_display(&id),
        counts: SeverityCounts {
            total: count_field(counts, "total"),
            critical: count_field(counts, "critical"),
            warn: count_field(counts, "warn"),
            info: count_field(counts, "info"),
        },
        by_type: typed_counts(array_field(Some(raw), "by_type")),
        status: str_field(Some(raw), "status").unwrap_or("OFF").to_string(),
        location_info: LocationInfo {
            fov_location_name: str_field(Some(raw), "fov_location_name")
                .unwrap_or(PLACEHOLDER_LOCATION)
                .to_string(),
            area_name: str_field(Some(raw), "area_name")
                .unwrap_or(PLACEHOLDER_LOCATION)
                .to_string(),
            emap_image_url: str_field(Some(raw), "emap_image_url").map(str::to_string),
            fov_thumbnail_url: str_field(Some(raw), "fov_thumbnail_url").map(str::to_string),
            position: parse_position(raw.get("position")),
        },
        range: DateRange {
            start: str_field(range, "start").unwrap_or(NA).to_string(),
            end: str_field(range, "end").unwrap_or(NA).to_string(),
        },
        channel_id: id,
    }
}

/// Parse a raw position object; missing coordinates default to 0,
/// non-objects to no position at all.
fn parse_position(raw: Option<&Value>) -> Option<Position> {
    let obj = raw?.as_object()?;
    Some(Position {
        x: obj.get("x").and_then(Value::as_f64).unwrap_or(0.0),
        y: obj.get("y").and_then(Value::as_f64).unwrap_or(0.0),
    })
}

/// CSS placement for the camera marker, or `None` without a position.
///
/// The class carries the lowercased status, `off` when the status string is
/// empty.
pub fn marker_style(position: Option<&Position>, status: &str) -> Option<MarkerStyle> {
    let position = position?;
    let status_class = if status.is_empty() {
        "status-off".to_string()
    } else {
        format!("status-{}", status.to_lowercase())
    };

    Some(MarkerStyle {
        left: format!("{}%", position.x),
        top: format!("{}%", position.y),
        class: format!("camera-marker {status_class}"),
    })
}

/// Severity rates and level for a channel detail.
///
/// All rates are 0 and the level `normal` when the channel has no events.
pub fn severity_summary(detail: &ChannelDetail) -> ChannelSeveritySummary {
    let counts = &detail.counts;
    let critical_rate = percentage(counts.critical, counts.total);
    let warn_rate = percentage(counts.warn, counts.total);

    ChannelSeveritySummary {
        critical_rate,
        warn_rate,
        info_rate: percentage(counts.info, counts.total),
        severity_level: classify_severity_level(critical_rate, warn_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- empty_detail / build_detail -------------------------------------

    #[test]
    fn test_empty_detail_canonical_shape() {
        let detail = empty_detail("7");
        assert_eq!(detail.channel_id, "7");
        assert_eq!(detail.name, "CH07");
        assert_eq!(detail.channel_display, "CH07");
        assert_eq!(detail.counts, SeverityCounts::default());
        assert!(detail.by_type.is_empty());
        assert_eq!(detail.status, "OFF");
        assert_eq!(detail.location_info.fov_location_name, "정보 없음");
        assert_eq!(detail.location_info.area_name, "정보 없음");
        assert_eq!(detail.location_info.emap_image_url, None);
        assert_eq!(detail.location_info.position, None);
        assert_eq!(detail.range.start, "N/A");
        assert_eq!(detail.range.end, "N/A");
    }

    #[test]
    fn test_build_detail_absent_inputs_agree() {
        assert_eq!(build_detail(None, "7"), empty_detail("7"));
        assert_eq!(build_detail(Some(&Value::Null), "7"), empty_detail("7"));
        assert_eq!(build_detail(Some(&json!({})), "7"), empty_detail("7"));
    }

    #[test]
    fn test_build_detail_full_payload() {
        let raw = json!({
            "channel_id": 12,
            "name": "Dock cam",
            "counts": {"total": 8, "critical": 2, "warn": 4, "info": 2},
            "by_type": [{"label": "intrusion", "count": 8}],
            "status": "ON",
            "fov_location_name": "Dock A",
            "area_name": "Shipping",
            "emap_image_url": "/static/emap/dock.png",
            "fov_thumbnail_url": "/static/fov_thumbnails/ch12.jpg",
            "position": {"x": 30.5, "y": 70},
            "range": {"start": "2025-07-26", "end": "2025-09-24"}
        });
        let detail = build_detail(Some(&raw), "12");
        assert_eq!(detail.channel_id, "12");
        assert_eq!(detail.channel_display, "CH12");
        assert_eq!(detail.name, "Dock cam");
        assert_eq!(detail.counts.total, 8);
        assert_eq!(detail.by_type.len(), 1);
        assert_eq!(detail.status, "ON");
        assert_eq!(detail.location_info.area_name, "Shipping");
        assert_eq!(
            detail.location_info.position,
            Some(Position { x: 30.5, y: 70.0 })
        );
        assert_eq!(detail.range.start, "2025-07-26");
    }

    #[test]
    fn test_build_detail_fields_default_independently() {
        // Counts present but partial, location missing, raw id absent.
        let raw = json!({"counts": {"critical": 3}, "status": "ERROR"});
        let detail = build_detail(Some(&raw), "4");
        assert_eq!(detail.channel_id, "4");
        assert_eq!(detail.name, "CH04");
        assert_eq!(detail.counts.critical, 3);
        assert_eq!(detail.counts.total, 0);
        assert_eq!(detail.status, "ERROR");
        assert_eq!(detail.location_info.fov_location_name, "정보 없음");
    }

    #[test]
    fn test_build_detail_prefers_raw_channel_id() {
        let raw = json!({"channel_id": "9", "counts": {}});
        let detail = build_detail(Some(&raw), "4");
        assert_eq!(detail.channel_id, "9");
        assert_eq!(detail.channel_display, "CH09");
    }

    // -- marker_style ----------------------------------------------------

    #[test]
    fn test_marker_style_requires_position() {
        assert_eq!(marker_style(None, "ON"), None);
    }

    #[test]
    fn test_marker_style_formats_percentages_and_class() {
        let style = marker_style(Some(&Position { x: 30.0, y: 70.5 }), "ON").unwrap();
        assert_eq!(style.left, "30%");
        assert_eq!(style.top, "70.5%");
        assert_eq!(style.class, "camera-marker status-on");
    }

    #[test]
    fn test_marker_style_empty_status_falls_back_to_off() {
        let style = marker_style(Some(&Position::default()), "").unwrap();
        assert_eq!(style.left, "0%");
        assert_eq!(style.class, "camera-marker status-off");
    }

    // -- severity_summary ------------------------------------------------

    #[test]
    fn test_severity_summary_zero_total() {
        let summary = severity_summary(&empty_detail("1"));
        assert_eq!(summary.critical_rate, 0.0);
        assert_eq!(summary.warn_rate, 0.0);
        assert_eq!(summary.info_rate, 0.0);
        assert_eq!(summary.severity_level, SeverityLevel::Normal);
    }

    #[test]
    fn test_severity_summary_rates_and_level() {
        let mut detail = empty_detail("1");
        detail.counts = SeverityCounts { total: 10, critical: 4, warn: 5, info: 1 };
        let summary = severity_summary(&detail);
        assert_eq!(summary.critical_rate, 40.0);
        assert_eq!(summary.warn_rate, 50.0);
        assert_eq!(summary.info_rate, 10.0);
        assert_eq!(summary.severity_level, SeverityLevel::High);
    }
}
