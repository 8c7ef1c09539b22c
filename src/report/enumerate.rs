// src/report/enumerate.rs

use std::{fmt, ops::RangeInclusive};

use super::types::ReportType;

pub const FIRST_YEAR: u16 = 1970;
pub const LAST_YEAR: u16 = 2023;

/// One remote fetch: a report tab, its optional sub-category and the year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryTuple {
    pub report: ReportType,
    pub sub_category: Option<u8>,
    pub year: u16,
}

impl QueryTuple {
    /// `Categoria` for this tuple, `None` for types without sub-categories
    /// or when the index has no label.
    pub fn category_label(&self) -> Option<&'static str> {
        self.sub_category
            .and_then(|n| self.report.category_label(n))
    }
}

impl fmt::Display for QueryTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_category {
            Some(n) => write!(f, "{}/{}@{}", self.report.opcao(), n, self.year),
            None => write!(f, "{}@{}", self.report.opcao(), self.year),
        }
    }
}

/// Every tuple for `year`: report types ascending, then sub-categories
/// ascending. Types without sub-categories yield exactly one tuple.
pub fn tuples_for_year(year: u16) -> impl Iterator<Item = QueryTuple> {
    ReportType::ALL.into_iter().flat_map(move |report| {
        let bare = (!report.has_categories()).then_some(None);
        let subs = (1..=report.category_count()).map(Some);
        bare.into_iter()
            .chain(subs)
            .map(move |sub_category| QueryTuple {
                report,
                sub_category,
                year,
            })
    })
}

/// Tuples for a whole year range, years ascending.
pub fn tuples(years: RangeInclusive<u16>) -> impl Iterator<Item = QueryTuple> {
    years.flat_map(tuples_for_year)
}

pub fn default_years() -> RangeInclusive<u16> {
    FIRST_YEAR..=LAST_YEAR
}
