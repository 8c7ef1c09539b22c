use thiserror::Error;

/// Reasons a fetched page yields no table.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no table matched {locator} ({found} tables on page)")]
    TableNotFound { locator: String, found: usize },

    #[error("table has no header row")]
    EmptyTable,
}

/// Failures that abort a whole sweep. Per-tuple problems never end up here.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("worker for {tuple} failed: {source}")]
    Worker {
        tuple: String,
        #[source]
        source: tokio::task::JoinError,
    },
}
