//! HTTP server and proxy plumbing
//!
//! Thin layer around the normalization core: routers fetch raw JSON from
//! the monitoring backend, pass it through the matching view-model builder,
//! and return the result as JSON. One module per dashboard panel, following
//! the `create_*_api_router` + `*ApiState` convention.

pub mod analytics_api;
pub mod backend;
pub mod channels_api;
pub mod http;
pub mod summary_api;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::DashboardError;

/// Map an error to the JSON error response the dashboard expects.
///
/// Validation failures become 400s, backend non-2xx statuses are propagated
/// as-is, connection failures become 502s, and everything else is a 500.
pub(crate) fn error_response(err: &DashboardError) -> Response {
    let status = match err {
        DashboardError::DateRange(_) | DashboardError::InvalidChannelId(_) => {
            StatusCode::BAD_REQUEST
        }
        DashboardError::Backend { status } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        DashboardError::Request(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
