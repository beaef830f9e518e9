//! Default constants for nvrdash configuration.

/// Default HTTP listen address.
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8006";

/// Default monitoring backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default backend request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
