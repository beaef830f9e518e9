//! Color and icon tokens for chart and status rendering.
//!
//! Immutable lookup tables keyed by closed enumerations with explicit
//! fallbacks for unrecognized values. The hex values are part of the
//! dashboard's visual contract and must not drift.

use serde::{Deserialize, Serialize};

use crate::view::SeverityFilter;

/// Chart palette for critical-filtered views.
const CRITICAL_PALETTE: [&str; 5] = ["#DD2E44", "#E74C3C", "#C0392B", "#A93226", "#922B21"];
/// Chart palette for warn-filtered views.
const WARN_PALETTE: [&str; 5] = ["#F4900C", "#E67E22", "#D68910", "#B7950B", "#9A7D0A"];
/// Chart palette for info-filtered views.
const INFO_PALETTE: [&str; 5] = ["#77B256", "#58D68D", "#52C41A", "#389E0D", "#237804"];
/// Mixed palette for unfiltered views.
const ALL_PALETTE: [&str; 10] = [
    "#FF6384", "#6EC6FF", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8B4513", "#727171",
    "#228B22", "#00008B",
];

/// Channel status as a closed enumeration for lookup tables.
///
/// Stored status strings are not constrained to this set; lookups parse
/// leniently and fall back to [`ChannelStatus::Off`] (colors) or a dedicated
/// unknown token (icons) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChannelStatus {
    /// Channel is online and recording.
    On,
    /// Channel is offline.
    Off,
    /// Channel is under maintenance.
    Maintenance,
    /// Channel reported a fault.
    Error,
}

impl ChannelStatus {
    /// Parse a raw status string, case-insensitively.
    pub fn parse(status: &str) -> Option<Self> {
        match status.to_ascii_uppercase().as_str() {
            "ON" => Some(Self::On),
            "OFF" => Some(Self::Off),
            "MAINTENANCE" => Some(Self::Maintenance),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Background/text color pair for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColor {
    /// Badge background color.
    pub bg: &'static str,
    /// Badge text color.
    pub text: &'static str,
}

/// Chart colors for a severity filter, truncated to `count` entries.
///
/// Asking for more colors than the palette holds returns the full palette.
pub fn severity_palette(filter: SeverityFilter, count: usize) -> &'static [&'static str] {
    let palette: &'static [&'static str] = match filter {
        SeverityFilter::Critical => &CRITICAL_PALETTE,
        SeverityFilter::Warn => &WARN_PALETTE,
        SeverityFilter::Info => &INFO_PALETTE,
        SeverityFilter::All => &ALL_PALETTE,
    };
    &palette[..count.min(palette.len())]
}

/// Single rgba() color for bar charts, with the given alpha.
pub fn severity_bar_color(filter: SeverityFilter, alpha: f64) -> String {
    match filter {
        SeverityFilter::Critical => format!("rgba(221, 46, 68, {alpha})"),
        SeverityFilter::Warn => format!("rgba(244, 144, 12, {alpha})"),
        SeverityFilter::Info => format!("rgba(119, 178, 86, {alpha})"),
        SeverityFilter::All => format!("rgba(102, 198, 255, {alpha})"),
    }
}

/// Badge colors for a raw status string; unrecognized statuses get the OFF
/// colors.
pub fn status_color(status: &str) -> StatusColor {
    match ChannelStatus::parse(status).unwrap_or(ChannelStatus::Off) {
        ChannelStatus::On => StatusColor { bg: "#28a745", text: "white" },
        ChannelStatus::Off => StatusColor { bg: "#dc3545", text: "white" },
        ChannelStatus::Maintenance => StatusColor { bg: "#ffc107", text: "black" },
        ChannelStatus::Error => StatusColor { bg: "#6c757d", text: "white" },
    }
}

/// Status icon for a raw status string; unrecognized statuses get the
/// unknown icon.
pub fn status_icon(status: &str) -> &'static str {
    match ChannelStatus::parse(status) {
        Some(ChannelStatus::On) => "🟢",
        Some(ChannelStatus::Off) => "🔴",
        Some(ChannelStatus::Maintenance) => "🟡",
        Some(ChannelStatus::Error) => "⚫",
        None => "❓",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_palette_truncates() {
        assert_eq!(severity_palette(SeverityFilter::Critical, 2).len(), 2);
        assert_eq!(severity_palette(SeverityFilter::Critical, 2)[0], "#DD2E44");
        assert_eq!(severity_palette(SeverityFilter::All, 10).len(), 10);
    }

    #[test]
    fn test_severity_palette_count_beyond_len() {
        assert_eq!(severity_palette(SeverityFilter::Warn, 50).len(), 5);
    }

    #[test]
    fn test_severity_bar_color_alpha_formatting() {
        assert_eq!(
            severity_bar_color(SeverityFilter::Critical, 1.0),
            "rgba(221, 46, 68, 1)"
        );
        assert_eq!(
            severity_bar_color(SeverityFilter::All, 0.5),
            "rgba(102, 198, 255, 0.5)"
        );
    }

    #[test]
    fn test_status_color_lookup_and_fallback() {
        assert_eq!(status_color("ON").bg, "#28a745");
        assert_eq!(status_color("maintenance").bg, "#ffc107");
        // Unrecognized statuses use the OFF colors.
        assert_eq!(status_color("rebooting").bg, "#dc3545");
    }

    #[test]
    fn test_status_icon_lookup_and_fallback() {
        assert_eq!(status_icon("on"), "🟢");
        assert_eq!(status_icon("ERROR"), "⚫");
        assert_eq!(status_icon("rebooting"), "❓");
    }
}
