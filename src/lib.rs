#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # nvrdash
//!
//! nvrdash is a dashboard backend for NVR event monitoring: it proxies a
//! remote monitoring API and reshapes its raw, partially-missing JSON into
//! complete, display-ready view models for summary cards, charts, and a
//! channel grid with per-channel detail modals.
//!
//! ## Features
//!
//! - **Total normalization**: every view-model builder degrades missing or
//!   malformed optional fields to documented defaults - no failure paths
//! - **Fixed-shape charts**: the hourly bar chart is always 24 buckets,
//!   so rendering never has to handle gaps
//! - **Derived figures**: percentages, trends, peak detection, top-N
//!   ranking, and threshold-based severity classification
//! - **CORS proxy**: the dashboard frontend can be hosted from any origin
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with defaults (listens on 127.0.0.1:8006)
//! $ ./nvrdash
//!
//! # Point at a backend and open up CORS for the dashboard host
//! $ ./nvrdash --backend-url http://nvr-backend:8000 \
//!     --allowed-origin http://dashboard.local
//! ```
//!
//! ## Library Usage
//!
//! The normalization core is pure and usable without the server:
//!
//! ```
//! use nvrdash::view::summary::normalize_summary;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "counts": {"total": 10, "critical": 3, "warn": 5, "info": 2},
//!     "range": {"start": "2025-01-01", "end": "2025-01-31"}
//! });
//! let summary = normalize_summary(Some(&raw));
//! assert_eq!(summary.critical, 3);
//!
//! // Missing data is never an error.
//! assert_eq!(normalize_summary(None).total, 0);
//! ```
//!
//! ## Architecture
//!
//! - [`view`]: the normalization core - pure view-model builders
//! - [`server`]: axum routers, CORS middleware, and the backend client
//! - [`config`]: server configuration and CLI arguments
//! - [`error`]: error types and Result alias

pub mod config;
pub mod error;
pub mod server;
pub mod view;

pub use config::{ServerArgs, ServerConfig};
pub use error::{DashboardError, DateRangeError, Result};
