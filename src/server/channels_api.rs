//! Channel grid and detail proxy API
//!
//! ## Endpoints
//!
//! - `GET /api/proxy/channels` - Fetch per-channel statistics and return
//!   the channel grid view model with its status summary, top-N ranking,
//!   and event distribution. Optional status/search/count filters are
//!   applied server-side.
//! - `GET /api/proxy/channels/:channel_id` - Fetch a single channel and
//!   return its detail-modal view model with the derived severity summary
//!   and camera marker placement.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::server::backend::BackendClient;
use crate::server::error_response;
use crate::view::channels::{
    build_channel_grid, event_distribution, filter_by_event_count, filter_by_status, search,
    status_summary, top_active, validate_channel_id, ChannelStatusSummary, ChannelSummary,
    EventDistribution, DEFAULT_TOP_LIMIT,
};
use crate::view::detail::{
    build_detail, marker_style, severity_summary, ChannelDetail, ChannelSeveritySummary,
    MarkerStyle,
};
use crate::view::summary::validate_date_range;
use crate::view::SeverityFilter;

/// Shared state for the channels API
#[derive(Clone)]
pub struct ChannelsApiState {
    /// Backend client for upstream fetches
    pub backend: Arc<BackendClient>,
}

/// Query parameters for the channel grid endpoint
#[derive(Debug, Deserialize)]
pub struct ChannelsQuery {
    /// Range start date, `YYYY-MM-DD`
    #[serde(default)]
    pub start: Option<String>,
    /// Range end date, `YYYY-MM-DD`
    #[serde(default)]
    pub end: Option<String>,
    /// Severity filter (default: all)
    #[serde(default)]
    pub severity: Option<String>,
    /// Status filter (default: all)
    #[serde(default)]
    pub status: Option<String>,
    /// Search term over id, name, and location
    #[serde(default)]
    pub q: Option<String>,
    /// Minimum event count (inclusive)
    #[serde(default)]
    pub min_events: Option<u64>,
    /// Maximum event count (inclusive; absent = unbounded)
    #[serde(default)]
    pub max_events: Option<u64>,
    /// Top-N ranking size (default: 5)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for the channel detail endpoint
#[derive(Debug, Deserialize)]
pub struct ChannelDetailQuery {
    /// Range start date, `YYYY-MM-DD`
    #[serde(default)]
    pub start: Option<String>,
    /// Range end date, `YYYY-MM-DD`
    #[serde(default)]
    pub end: Option<String>,
    /// Severity filter (default: all)
    #[serde(default)]
    pub severity: Option<String>,
}

/// Channel grid view model with its aggregates
#[derive(Debug, Serialize)]
pub struct ChannelGridResponse {
    /// The (filtered) grid, sorted by channel number
    pub channels: Vec<ChannelSummary>,
    /// On/off summary over the grid
    pub summary: ChannelStatusSummary,
    /// Most active channels, busiest first
    pub top_active: Vec<ChannelSummary>,
    /// Aggregate event statistics
    pub distribution: EventDistribution,
}

/// Channel detail view model with derived figures
#[derive(Debug, Serialize)]
pub struct ChannelDetailResponse {
    /// The detail modal view model
    pub detail: ChannelDetail,
    /// Severity rates and classification
    pub severity: ChannelSeveritySummary,
    /// Camera marker placement, when the channel has map coordinates
    pub marker: Option<MarkerStyle>,
}

/// Create the channels API router
pub fn create_channels_api_router(state: ChannelsApiState) -> Router {
    Router::new()
        .route("/api/proxy/channels", get(channels_handler))
        .route("/api/proxy/channels/:channel_id", get(channel_detail_handler))
        .with_state(state)
}

/// GET /api/proxy/channels - Channel grid view model
async fn channels_handler(
    State(state): State<ChannelsApiState>,
    Query(query): Query<ChannelsQuery>,
) -> Response {
    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();
    if let Err(e) = validate_date_range(&start, &end) {
        return error_response(&e.into());
    }

    let filter = SeverityFilter::from_param(query.severity.as_deref().unwrap_or("all"));
    let raw = match state.backend.channels(&start, &end, filter.as_str()).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, start = %start, end = %end, "Failed to fetch channel stats");
            return error_response(&e);
        }
    };

    let mut channels = build_channel_grid(Some(&raw));
    if let Some(status) = &query.status {
        channels = filter_by_status(&channels, status);
    }
    if let Some(term) = &query.q {
        channels = search(&channels, term);
    }
    if query.min_events.is_some() || query.max_events.is_some() {
        channels =
            filter_by_event_count(&channels, query.min_events.unwrap_or(0), query.max_events);
    }

    let response = ChannelGridResponse {
        summary: status_summary(&channels),
        top_active: top_active(&channels, query.limit.unwrap_or(DEFAULT_TOP_LIMIT)),
        distribution: event_distribution(&channels),
        channels,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/proxy/channels/:channel_id - Channel detail view model
async fn channel_detail_handler(
    State(state): State<ChannelsApiState>,
    Path(channel_id): Path<String>,
    Query(query): Query<ChannelDetailQuery>,
) -> Response {
    if let Err(e) = validate_channel_id(&channel_id) {
        return error_response(&e);
    }

    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();
    if let Err(e) = validate_date_range(&start, &end) {
        return error_response(&e.into());
    }

    let filter = SeverityFilter::from_param(query.severity.as_deref().unwrap_or("all"));
    let raw = match state
        .backend
        .channel_detail(&channel_id, &start, &end, filter.as_str())
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, channel_id = %channel_id, "Failed to fetch channel detail");
            return error_response(&e);
        }
    };

    let detail = build_detail(Some(&raw), &channel_id);
    let response = ChannelDetailResponse {
        severity: severity_summary(&detail),
        marker: marker_style(detail.location_info.position.as_ref(), &detail.status),
        detail,
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> ChannelsApiState {
        ChannelsApiState {
            backend: Arc::new(BackendClient::new("http://127.0.0.1:1", 1).unwrap()),
        }
    }

    fn detail_query() -> ChannelDetailQuery {
        ChannelDetailQuery {
            start: Some("2025-07-26".to_string()),
            end: Some("2025-09-24".to_string()),
            severity: None,
        }
    }

    #[tokio::test]
    async fn test_grid_missing_params_rejected() {
        let query = ChannelsQuery {
            start: None,
            end: None,
            severity: None,
            status: None,
            q: None,
            min_events: None,
            max_events: None,
            limit: None,
        };
        let response = channels_handler(State(test_state()), Query(query)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detail_invalid_channel_id_rejected() {
        let response = channel_detail_handler(
            State(test_state()),
            Path("lobby".to_string()),
            Query(detail_query()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detail_accepts_all_keyword_but_needs_dates() {
        let mut query = detail_query();
        query.start = None;
        query.end = None;
        let response =
            channel_detail_handler(State(test_state()), Path("all".to_string()), Query(query))
                .await;
        // Passes id validation, then fails date validation.
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
