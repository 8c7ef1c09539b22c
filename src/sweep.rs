// src/sweep.rs

use futures::{stream, StreamExt};
use reqwest::Client;
use std::{ops::RangeInclusive, sync::Arc, time::Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::SweepError;
use crate::fetch::fetch_records;
use crate::record::Record;
use crate::report::{tuples_for_year, QueryTuple};
use crate::table::{ByPosition, TableLocator};

/// Runs the year × report × sub-category sweep against the portal.
///
/// Holds no state between sweeps besides the HTTP client.
#[derive(Debug, Clone)]
pub struct Sweeper {
    client: Client,
    base_url: Url,
    locator: Arc<dyn TableLocator>,
    years: RangeInclusive<u16>,
    concurrency: usize,
}

impl Sweeper {
    pub fn new(config: &Config) -> Result<Self, SweepError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            locator: Arc::new(ByPosition::default()),
            years: config.years.clone(),
            concurrency: config.concurrency.max(1),
        })
    }

    /// Swap the table-locating strategy.
    pub fn with_locator(mut self, locator: impl TableLocator + 'static) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    /// Every configured year, ascending, concatenated.
    #[instrument(level = "info", skip(self), fields(years = ?self.years))]
    pub async fn sweep(&self) -> Result<Vec<Record>, SweepError> {
        let start = Instant::now();
        let mut records = Vec::new();
        for year in self.years.clone() {
            records.extend(self.sweep_year(year).await?);
        }
        info!(
            records = records.len(),
            elapsed = ?start.elapsed(),
            "sweep finished"
        );
        Ok(records)
    }

    /// All tuples of one year, in enumeration order. At most `concurrency`
    /// fetches run at once; output order does not depend on it.
    #[instrument(level = "info", skip(self))]
    pub async fn sweep_year(&self, year: u16) -> Result<Vec<Record>, SweepError> {
        let mut batches = stream::iter(tuples_for_year(year))
            .map(|tuple| {
                let task = AbortOnDrop(tokio::spawn(fetch_or_empty(
                    self.client.clone(),
                    self.base_url.clone(),
                    Arc::clone(&self.locator),
                    tuple,
                )));
                async move {
                    let mut task = task;
                    (&mut task.0).await.map_err(|source| SweepError::Worker {
                        tuple: tuple.to_string(),
                        source,
                    })
                }
            })
            .buffered(self.concurrency);

        let mut records = Vec::new();
        while let Some(batch) = batches.next().await {
            records.extend(batch?);
        }
        debug!(records = records.len(), "year done");
        Ok(records)
    }
}

/// Aborts the fetch task when dropped, so an abandoned sweep stops its
/// in-flight fetches.
struct AbortOnDrop(JoinHandle<Vec<Record>>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Per-tuple failures are logged and count as zero records.
async fn fetch_or_empty(
    client: Client,
    base_url: Url,
    locator: Arc<dyn TableLocator>,
    tuple: QueryTuple,
) -> Vec<Record> {
    match fetch_records(&client, &base_url, locator.as_ref(), tuple).await {
        Ok(records) => records,
        Err(e) => {
            warn!(
                year = tuple.year,
                report = tuple.report.label(),
                sub_category = ?tuple.sub_category,
                error = %format!("{:#}", e),
                "skipping report page"
            );
            Vec::new()
        }
    }
}
