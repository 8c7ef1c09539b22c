pub mod config;
pub mod error;
pub mod fetch;
pub mod record;
pub mod report;
pub mod server;
pub mod sweep;
pub mod table;

pub use config::Config;
pub use error::{ExtractError, SweepError};
pub use record::Record;
pub use sweep::Sweeper;
