//! Event analytics proxy API
//!
//! ## Endpoints
//!
//! - `GET /api/proxy/events/analytics` - Fetch event analytics for a date
//!   range and return the chart view models: the type-distribution pie, the
//!   fixed 24-bucket hourly bars, and the derived figures (peak hour,
//!   hourly average, active hours, severity distribution).

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::server::backend::BackendClient;
use crate::server::error_response;
use crate::view::analytics::{
    active_hours, build_hourly_bars, build_type_pie, hourly_average, peak_hour,
    severity_distribution, SeverityDistribution, TypeSlice, DEFAULT_ACTIVE_THRESHOLD,
};
use crate::view::summary::validate_date_range;
use crate::view::{HourlyBucket, SeverityFilter};

/// Shared state for the analytics API
#[derive(Clone)]
pub struct AnalyticsApiState {
    /// Backend client for upstream fetches
    pub backend: Arc<BackendClient>,
}

/// Query parameters for the analytics endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// Range start date, `YYYY-MM-DD`
    #[serde(default)]
    pub start: Option<String>,
    /// Range end date, `YYYY-MM-DD`
    #[serde(default)]
    pub end: Option<String>,
    /// Severity filter (default: all)
    #[serde(default)]
    pub severity: Option<String>,
    /// Minimum events for a bucket to count as active (default: 1)
    #[serde(default)]
    pub threshold: Option<u64>,
}

/// Complete analytics view model for the chart panel
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Type-distribution pie slices
    pub type_pie: Vec<TypeSlice>,
    /// Hourly bars, always 24 buckets
    pub hourly_bar: Vec<HourlyBucket>,
    /// Busiest hour, if any events were recorded
    pub peak_hour: Option<HourlyBucket>,
    /// Mean events per hour over the day
    pub hourly_average: f64,
    /// Buckets at or above the activity threshold, busiest first
    pub active_hours: Vec<HourlyBucket>,
    /// Counts bucketed into severities by type label
    pub severity_distribution: SeverityDistribution,
}

/// Create the analytics API router
pub fn create_analytics_api_router(state: AnalyticsApiState) -> Router {
    Router::new()
        .route("/api/proxy/events/analytics", get(events_analytics_handler))
        .with_state(state)
}

/// GET /api/proxy/events/analytics - Analytics view model
async fn events_analytics_handler(
    State(state): State<AnalyticsApiState>,
    Query(query): Query<AnalyticsQuery>,
) -> Response {
    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();
    if let Err(e) = validate_date_range(&start, &end) {
        return error_response(&e.into());
    }

    let filter = SeverityFilter::from_param(query.severity.as_deref().unwrap_or("all"));
    let raw = match state
        .backend
        .events_analytics(&start, &end, filter.as_str())
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, start = %start, end = %end, "Failed to fetch event analytics");
            return error_response(&e);
        }
    };

    let hourly_bar = build_hourly_bars(Some(&raw));
    let threshold = query.threshold.unwrap_or(DEFAULT_ACTIVE_THRESHOLD);

    let response = AnalyticsResponse {
        type_pie: build_type_pie(Some(&raw)),
        peak_hour: peak_hour(&hourly_bar),
        hourly_average: hourly_average(&hourly_bar),
        active_hours: active_hours(&hourly_bar, threshold),
        severity_distribution: severity_distribution(Some(&raw), filter),
        hourly_bar,
    };

    (StatusCode::OK, Json(response)).into_response()
}
