//! nvrdash - NVR dashboard view-model service.

use clap::Parser;
use std::process::ExitCode;

use nvrdash::server::http::run_http_server;
use nvrdash::{Result, ServerArgs, ServerConfig};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("nvrdash failed to start: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let args = ServerArgs::parse();
    let config = ServerConfig::from_args(args)?;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.backend_url,
        "starting nvrdash"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_http_server(config))
}
