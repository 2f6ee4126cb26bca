use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use myownwebserver::config::ServerConfig;
use myownwebserver::log::FileLog;
use myownwebserver::server;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match ServerConfig::from_args(std::env::args_os()) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::from(e.exit_code()));
        }
    };

    let log = FileLog::create(&cfg.log_path)
        .with_context(|| format!("cannot create log file {}", cfg.log_path.display()))?;

    tokio::select! {
        res = server::run(&cfg, Arc::new(log)) => {
            // Already logged at the fault boundary; the server simply stops.
            if let Err(fault) = res {
                tracing::debug!(error = ?fault, "Server stopped");
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(ExitCode::SUCCESS)
}
