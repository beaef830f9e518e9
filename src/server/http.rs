//! HTTP server for the dashboard proxy API
//!
//! This module composes the per-panel routers into one application with:
//! - Health check (/health)
//! - Date-range passthrough (/api/date-range)
//! - Event summary proxy (/api/proxy/events/summary)
//! - Event analytics proxy (/api/proxy/events/analytics)
//! - Channel grid and detail proxies (/api/proxy/channels, /api/proxy/channels/:id)
//!
//! All routes are served behind a CORS middleware so the dashboard frontend
//! can be hosted from a different origin than this API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::ServiceBuilder;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::server::analytics_api::{create_analytics_api_router, AnalyticsApiState};
use crate::server::backend::BackendClient;
use crate::server::channels_api::{create_channels_api_router, ChannelsApiState};
use crate::server::error_response;
use crate::server::summary_api::{create_summary_api_router, SummaryApiState};

/// Build the complete application router.
pub fn create_http_router(backend: Arc<BackendClient>, allowed_origins: Vec<String>) -> Router {
    let cors_origins = Arc::new(allowed_origins);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/date-range", get(date_range_handler))
        .with_state(backend.clone())
        .merge(create_summary_api_router(SummaryApiState {
            backend: backend.clone(),
        }))
        .merge(create_analytics_api_router(AnalyticsApiState {
            backend: backend.clone(),
        }))
        .merge(create_channels_api_router(ChannelsApiState { backend }))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(
            move |req: axum::http::Request<axum::body::Body>, next: axum::middleware::Next| {
                let origins = cors_origins.clone();
                async move { cors_middleware(req, next, origins).await }
            },
        )))
}

/// Run the HTTP server until it exits.
pub async fn run_http_server(config: ServerConfig) -> Result<()> {
    let backend = Arc::new(BackendClient::new(
        &config.backend_url,
        config.request_timeout_secs,
    )?);
    let router = create_http_router(backend, config.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!(
        addr = %config.http_addr,
        backend = %config.backend_url,
        "HTTP server listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}

/// GET /health - Health check
async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "service": "nvrdash" })),
    )
        .into_response()
}

/// GET /api/date-range - Available data range, passed through unmodified
async fn date_range_handler(State(backend): State<Arc<BackendClient>>) -> Response {
    match backend.date_range().await {
        Ok(raw) => (StatusCode::OK, Json(raw)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to fetch date range");
            error_response(&e)
        }
    }
}

/// CORS middleware
async fn cors_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
    allowed_origins: Arc<Vec<String>>,
) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    // Handle preflight
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        add_cors_headers(response.headers_mut(), origin.as_deref(), &allowed_origins);
        return response;
    }

    let mut response = next.run(req).await;
    add_cors_headers(response.headers_mut(), origin.as_deref(), &allowed_origins);
    response
}

/// Add CORS headers to response
fn add_cors_headers(headers: &mut HeaderMap, origin: Option<&str>, allowed_origins: &[String]) {
    let allow_origin = if allowed_origins.is_empty() {
        // Allow all origins if none specified
        origin.unwrap_or("*").to_string()
    } else if let Some(origin) = origin {
        // Check if origin is in allowed list
        if allowed_origins.iter().any(|o| o == origin || o == "*") {
            origin.to_string()
        } else {
            return; // Don't add CORS headers for disallowed origin
        }
    } else {
        return;
    };

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(&allow_origin).unwrap_or_else(|_| HeaderValue::from_static("*")),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, X-Requested-With"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );
}
