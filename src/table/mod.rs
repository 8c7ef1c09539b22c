pub mod extract;
pub mod locate;
pub mod utils;

use serde_json::Value;

use crate::record::Record;
use utils::ColumnKind;

pub use extract::extract_table;
pub use locate::{ByHeader, ByPosition, TableLocator};

#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names from the first row, made unique.
    pub headers: Vec<String>,
    /// Every later row, as cleaned cell text.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Key each row by the header names. Every column gets one type, inferred
    /// from all its cells. Short rows are padded with null and cells beyond
    /// the last header are dropped.
    pub fn into_records(self) -> Vec<Record> {
        let RawTable { headers, rows } = self;
        let kinds: Vec<ColumnKind> = (0..headers.len())
            .map(|i| {
                utils::infer_column(rows.iter().filter_map(|r| r.get(i)).map(String::as_str))
            })
            .collect();

        rows.into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                headers
                    .iter()
                    .zip(&kinds)
                    .map(|(h, kind)| {
                        let v = cells
                            .next()
                            .map(|c| utils::to_scalar(*kind, &c))
                            .unwrap_or(Value::Null);
                        (h.clone(), v)
                    })
                    .collect()
            })
            .collect()
    }
}
