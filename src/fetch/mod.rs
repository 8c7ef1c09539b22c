// src/fetch/mod.rs

pub mod urls;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::ExtractError;
use crate::record::{label_rows, Record};
use crate::report::QueryTuple;
use crate::table::{extract_table, TableLocator};

pub use urls::{report_url, DEFAULT_BASE_URL};

/// GET `url` and return its body. Anything but a 200 is an error.
pub async fn get_text_core(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = resp.status();
    if status != StatusCode::OK {
        anyhow::bail!("Non-200 status {} from {}", status, url);
    }

    resp.text()
        .await
        .with_context(|| format!("Reading text from {}", url))
}

/// Locate the data table in `body` and label its rows for `tuple`.
pub fn extract_records(
    body: &str,
    locator: &dyn TableLocator,
    tuple: &QueryTuple,
) -> Result<Vec<Record>, ExtractError> {
    let table = extract_table(body, locator)?;
    Ok(label_rows(table, tuple))
}

/// Fetch the report page for `tuple` and return its labeled records.
#[instrument(level = "debug", skip_all, fields(tuple = %tuple))]
pub async fn fetch_records(
    client: &Client,
    base: &Url,
    locator: &dyn TableLocator,
    tuple: QueryTuple,
) -> Result<Vec<Record>> {
    let url = report_url(base, &tuple);
    let body = get_text_core(client, &url).await?;
    let records = extract_records(&body, locator, &tuple)
        .with_context(|| format!("extracting table from {}", url))?;
    debug!(rows = records.len(), "extracted");
    Ok(records)
}
