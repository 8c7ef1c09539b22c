// One-shot sweep: prints the /dados JSON to stdout.
//
// Usage: sweep [YEAR]
// Without YEAR the configured range (YEAR_START..=YEAR_END) is swept.

use anyhow::{Context, Result};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vitiscraper::{Config, Sweeper};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // logs go to stderr so stdout stays valid JSON
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env().context("reading configuration")?;
    if let Some(arg) = env::args().nth(1) {
        let year: u16 = arg
            .parse()
            .with_context(|| format!("invalid year {:?}", arg))?;
        config.years = year..=year;
    }

    let sweeper = Sweeper::new(&config)?;
    let records = sweeper.sweep().await?;
    info!(records = records.len(), "done");

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
