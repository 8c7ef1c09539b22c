pub mod enumerate;
pub mod types;

pub use enumerate::{default_years, tuples, tuples_for_year, QueryTuple, FIRST_YEAR, LAST_YEAR};
pub use types::{subopcao, ReportType};
