//! Command-line arguments for the nvrdash server
//!
//! This module defines the CLI arguments structure using clap.

use clap::Parser;

use super::defaults::*;

/// Command-line arguments for the nvrdash server
#[derive(Parser, Debug, Clone)]
#[command(name = "nvrdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Display-ready view models and proxy API for NVR event monitoring dashboards")]
pub struct ServerArgs {
    /// Address to listen on for the HTTP API
    #[arg(long, env = "NVRDASH_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    pub http_addr: String,

    /// Base URL of the monitoring backend to proxy
    #[arg(long, env = "NVRDASH_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Backend request timeout in seconds
    #[arg(long, env = "NVRDASH_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// CORS allowed origin (repeatable). No value allows all origins.
    #[arg(long = "allowed-origin", env = "NVRDASH_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "NVRDASH_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
