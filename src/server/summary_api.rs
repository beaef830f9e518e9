//! Event summary proxy API
//!
//! ## Endpoints
//!
//! - `GET /api/proxy/events/summary` - Fetch the event summary for a date
//!   range and return it as the stat-card view model. An optional severity
//!   filter narrows the counts to a single severity.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::error;

use crate::server::backend::BackendClient;
use crate::server::error_response;
use crate::view::summary::{normalize_summary, severity_stats_for, validate_date_range};
use crate::view::SeverityFilter;

/// Shared state for the summary API
#[derive(Clone)]
pub struct SummaryApiState {
    /// Backend client for upstream fetches
    pub backend: Arc<BackendClient>,
}

/// Query parameters for the summary endpoint
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
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

/// Create the summary API router
pub fn create_summary_api_router(state: SummaryApiState) -> Router {
    Router::new()
        .route("/api/proxy/events/summary", get(events_summary_handler))
        .with_state(state)
}

/// GET /api/proxy/events/summary - Event summary view model
async fn events_summary_handler(
    State(state): State<SummaryApiState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();
    if let Err(e) = validate_date_range(&start, &end) {
        return error_response(&e.into());
    }

    let raw = match state.backend.events_summary(&start, &end).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, start = %start, end = %end, "Failed to fetch event summary");
            return error_response(&e);
        }
    };

    let mut summary = normalize_summary(Some(&raw));

    let filter = SeverityFilter::from_param(query.severity.as_deref().unwrap_or("all"));
    if filter != SeverityFilter::All {
        let stats = severity_stats_for(Some(&raw), filter);
        summary.total = stats.total;
        summary.critical = stats.critical;
        summary.warn = stats.warn;
        summary.info = stats.info;
    }

    (StatusCode::OK, Json(summary)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> SummaryApiState {
        // Unroutable backend: handler tests below never reach the fetch.
        SummaryApiState {
            backend: Arc::new(BackendClient::new("http://127.0.0.1:1", 1).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_missing_params_rejected() {
        let query = SummaryQuery { start: None, end: None, severity: None };
        let response = events_summary_handler(State(test_state()), Query(query)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_inverted_range_rejected() {
        let query = SummaryQuery {
            start: Some("2025-09-24".to_string()),
            end: Some("2025-07-26".to_string()),
            severity: None,
        };
        let response = events_summary_handler(State(test_state()), Query(query)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_summary_query_deserialize() {
        let query: SummaryQuery =
            serde_json::from_str(r#"{"start": "2025-07-26", "end": "2025-09-24"}"#).unwrap();
        assert_eq!(query.start.as_deref(), Some("2025-07-26"));
        assert_eq!(query.severity, None);
    }
}
