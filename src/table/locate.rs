// src/table/locate.rs

use scraper::ElementRef;
use std::fmt;

use super::extract::header_cells;

/// Index of the data table on a Vitibrasil report page.
pub const DATA_TABLE_INDEX: usize = 3;

/// Strategy for picking the data table out of every `<table>` on a page.
pub trait TableLocator: fmt::Debug + Send + Sync {
    /// `tables` holds every table of the document in document order.
    fn locate<'a>(&self, tables: &[ElementRef<'a>]) -> Option<ElementRef<'a>>;
}

/// Pick the table at a fixed zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByPosition(pub usize);

impl Default for ByPosition {
    fn default() -> Self {
        ByPosition(DATA_TABLE_INDEX)
    }
}

impl TableLocator for ByPosition {
    fn locate<'a>(&self, tables: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
        tables.get(self.0).copied()
    }
}

/// Pick the first table whose header row contains all of `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByHeader {
    columns: Vec<String>,
}

impl ByHeader {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl TableLocator for ByHeader {
    fn locate<'a>(&self, tables: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
        tables.iter().copied().find(|table| {
            let header = header_cells(*table);
            self.columns.iter().all(|c| header.contains(c))
        })
    }
}
