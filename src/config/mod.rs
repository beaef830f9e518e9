//! Configuration module for nvrdash
//!
//! This module is organized into submodules:
//! - `defaults` - Default constants and values
//! - `args` - CLI argument definitions

mod args;
mod defaults;

pub use args::ServerArgs;
pub use defaults::*;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::{DashboardError, Result};

/// Complete server configuration for nvrdash.
///
/// Settings are resolved from CLI arguments with `NVRDASH_*` environment
/// variable overrides, falling back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on for the HTTP API
    pub http_addr: SocketAddr,

    /// Base URL of the monitoring backend, without a trailing slash
    pub backend_url: String,

    /// Backend request timeout in seconds
    pub request_timeout_secs: u64,

    /// CORS allowed origins (empty = allow all)
    pub allowed_origins: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl ServerConfig {
    /// Build a configuration from parsed CLI arguments.
    pub fn from_args(args: ServerArgs) -> Result<Self> {
        let http_addr: SocketAddr = args.http_addr.parse().map_err(|e| {
            DashboardError::Config(format!("invalid http address '{}': {}", args.http_addr, e))
        })?;

        Ok(Self {
            http_addr,
            backend_url: args.backend_url.trim_end_matches('/').to_string(),
            request_timeout_secs: args.request_timeout_secs,
            allowed_origins: args.allowed_origins,
            log_level: args.log_level,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // The defaults are valid by construction; a parse failure here
            // would be a bug in the constants themselves.
            http_addr: DEFAULT_HTTP_ADDR.parse().unwrap_or(SocketAddr::from(([127, 0, 0, 1], 8006))),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            allowed_origins: Vec::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
