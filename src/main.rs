use anyhow::{Context, Result};
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vitiscraper::{server, Config, Sweeper};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::from_env().context("reading configuration")?;
    let sweeper = Sweeper::new(&config).context("building sweeper")?;
    info!(
        base_url = %config.base_url,
        years = ?config.years,
        concurrency = config.concurrency,
        timeout = ?config.request_timeout,
        "configured"
    );

    // ─── 3) serve ────────────────────────────────────────────────────
    info!("Server starting on port {}", config.port);
    info!("Data endpoint: http://localhost:{}/dados", config.port);
    info!("Health check: http://localhost:{}/health", config.port);

    warp::serve(server::routes(Arc::new(sweeper)))
        .run(([0, 0, 0, 0], config.port))
        .await;

    Ok(())
}
