//! End-to-end tests for the normalization core.
//!
//! Drives the view-model builders through the public API with realistic
//! backend payloads, covering the documented degradation behavior for
//! missing and partial data.

use nvrdash::view::analytics::{build_hourly_bars, build_type_pie, peak_hour};
use nvrdash::view::channels::{build_channel_grid, top_active};
use nvrdash::view::detail::build_detail;
use nvrdash::view::severity::{percentage, trend};
use nvrdash::view::summary::{normalize_summary, validate_date_range};
use nvrdash::DateRangeError;
use serde_json::json;

#[test]
fn summary_scenario_full_payload() {
    let raw = json!({
        "counts": {"total": 10, "critical": 3, "warn": 5, "info": 2},
        "range": {"start": "2025-01-01", "end": "2025-01-31"}
    });
    let summary = normalize_summary(Some(&raw));
    assert_eq!(summary.total, 10);
    assert_eq!(summary.critical, 3);
    assert_eq!(summary.warn, 5);
    assert_eq!(summary.info, 2);
    assert_eq!(summary.range.start, "2025-01-01");
    assert_eq!(summary.range.end, "2025-01-31");
}

#[test]
fn summary_missing_counts_yields_zero_defaults() {
    let summary = normalize_summary(None);
    assert_eq!(
        (summary.total, summary.critical, summary.warn, summary.info),
        (0, 0, 0, 0)
    );
    assert_eq!(summary.range.start, "N/A");
    assert_eq!(summary.range.end, "N/A");
}

#[test]
fn trend_scenarios() {
    let t = trend(0, 0);
    assert_eq!((t.delta, t.percentage), (0, 0.0));

    let t = trend(5, 0);
    assert_eq!((t.delta, t.percentage), (5, 100.0));
}

#[test]
fn inverted_date_range_fails_validation() {
    assert_eq!(
        validate_date_range("2025-09-24", "2025-07-26"),
        Err(DateRangeError::InvertedRange {
            start: "2025-09-24".to_string(),
            end: "2025-07-26".to_string(),
        })
    );
}

#[test]
fn percentage_is_total_and_bounded() {
    assert_eq!(percentage(7, 0), 0.0);
    assert_eq!(percentage(0, 0), 0.0);
    for part in 0..=12 {
        let p = percentage(part, 12);
        assert!((0.0..=100.0).contains(&p), "percentage {p} out of bounds");
    }
}

#[test]
fn hourly_bars_cover_every_hour_from_sparse_unordered_input() {
    let raw = json!({"hourly_bar": [
        {"hour": 23, "count": 2},
        {"hour": 0, "count": 4},
        {"hour": 12, "count": 1},
    ]});
    let bars = build_hourly_bars(Some(&raw));
    assert_eq!(bars.len(), 24);
    let hours: Vec<u8> = bars.iter().map(|b| b.hour).collect();
    assert_eq!(hours, (0..24).collect::<Vec<u8>>());
    assert_eq!(bars[0].count, 4);
    assert_eq!(bars[12].count, 1);
    assert_eq!(bars[23].count, 2);
    assert!(bars.iter().all(|b| b.label.ends_with(":00")));
}

#[test]
fn peak_hour_tie_break_prefers_lowest_hour() {
    let raw = json!({"hourly_bar": [
        {"hour": 3, "count": 5},
        {"hour": 10, "count": 5},
    ]});
    let bars = build_hourly_bars(Some(&raw));
    let peak = peak_hour(&bars).expect("non-empty buckets have a peak");
    assert_eq!(peak.hour, 3);
    assert_eq!(peak.count, 5);
    assert_eq!(peak.label, "03:00");
}

#[test]
fn type_pie_percentages_against_whole() {
    let raw = json!({"type_pie": [
        {"label": "intrusion", "count": 30},
        {"label": "loitering", "count": 10},
    ]});
    let pie = build_type_pie(Some(&raw));
    assert_eq!(pie[0].percentage, 75.0);
    assert_eq!(pie[1].percentage, 25.0);
}

#[test]
fn empty_grid_round_trip() {
    assert!(build_channel_grid(Some(&json!({"items": []}))).is_empty());
}

#[test]
fn top_active_length_is_min_of_limit_and_len() {
    let raw = json!({"items": [
        {"channel_id": 1, "count": 5},
        {"channel_id": 2, "count": 50},
        {"channel_id": 3, "count": 20},
    ]});
    let grid = build_channel_grid(Some(&raw));

    let top = top_active(&grid, 2);
    assert_eq!(top.len(), 2);
    assert!(top[0].total_events >= top[1].total_events);

    assert_eq!(top_active(&grid, 10).len(), 3);
}

#[test]
fn detail_canonical_empty_fallback() {
    let from_none = build_detail(None, "7");
    let from_null = build_detail(Some(&serde_json::Value::Null), "7");
    assert_eq!(from_none, from_null);
    assert_eq!(from_none.channel_display, "CH07");
    assert_eq!(from_none.status, "OFF");
    assert_eq!(from_none.counts.total, 0);
    assert_eq!(from_none.range.start, "N/A");
}
