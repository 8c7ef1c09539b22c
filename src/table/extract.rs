// src/table/extract.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{instrument, trace};

use super::locate::TableLocator;
use super::utils::{clean_str, unique_headers};
use super::RawTable;
use crate::error::ExtractError;

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector should parse"));

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Rows that belong to `table` itself, in document order. Rows of nested
/// tables are not included.
pub fn table_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in child_elements(table) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child_elements(child).filter(|e| e.value().name() == "tr"))
            }
            _ => {}
        }
    }
    rows
}

/// Cleaned text of every `th`/`td` cell in a row.
pub fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    child_elements(row)
        .filter(|e| matches!(e.value().name(), "th" | "td"))
        .map(|cell| clean_str(&cell.text().collect::<Vec<_>>().join(" ")))
        .collect()
}

/// Cells of the first row of `table`, empty when it has no rows.
pub fn header_cells(table: ElementRef<'_>) -> Vec<String> {
    table_rows(table)
        .into_iter()
        .next()
        .map(row_cells)
        .unwrap_or_default()
}

/// First row becomes the headers; every following non-empty row is data.
pub fn read_table(table: ElementRef<'_>) -> Result<RawTable, ExtractError> {
    let mut rows = table_rows(table).into_iter().map(row_cells);
    let headers = rows
        .next()
        .filter(|h| !h.is_empty())
        .ok_or(ExtractError::EmptyTable)?;

    Ok(RawTable {
        headers: unique_headers(headers),
        rows: rows.filter(|r| !r.is_empty()).collect(),
    })
}

/// Parse `html`, let `locator` choose among all tables on the page and read
/// the chosen one.
#[instrument(level = "trace", skip_all, fields(html_len = html.len()))]
pub fn extract_table(html: &str, locator: &dyn TableLocator) -> Result<RawTable, ExtractError> {
    let doc = Html::parse_document(html);
    let tables: Vec<ElementRef<'_>> = doc.select(&TABLE).collect();
    trace!(count = tables.len(), "tables on page");

    let table = locator
        .locate(&tables)
        .ok_or_else(|| ExtractError::TableNotFound {
            locator: format!("{:?}", locator),
            found: tables.len(),
        })?;
    read_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::locate::{ByHeader, ByPosition};

    fn page(data_table: &str) -> String {
        format!(
            r#"<html><body>
            <table><tr><td>menu</td></tr></table>
            <table><tr><td>banner</td></tr></table>
            <table><tr><td>filters</td></tr></table>
            {}
            </body></html>"#,
            data_table
        )
    }

    #[test]
    fn test_fourth_table_is_read() {
        let html = page(
            r#"<table class="tb_base tb_dados">
              <thead><tr><th>Produto</th><th>Quantidade (L.)</th></tr></thead>
              <tbody>
                <tr><td>VINHO DE MESA</td><td>217208604</td></tr>
                <tr><td>  Tinto </td><td>174224052</td></tr>
              </tbody>
              <tfoot><tr><td>Total</td><td>457792870</td></tr></tfoot>
            </table>"#,
        );

        let table = extract_table(&html, &ByPosition::default()).unwrap();
        assert_eq!(table.headers, vec!["Produto", "Quantidade (L.)"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["VINHO DE MESA", "217208604"],
                vec!["Tinto", "174224052"],
                vec!["Total", "457792870"],
            ]
        );
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let html = "<table><tr><td>only</td></tr></table>";
        let err = extract_table(html, &ByPosition::default()).unwrap_err();
        match err {
            ExtractError::TableNotFound { found, .. } => assert_eq!(found, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let html = page("<table></table>");
        let err = extract_table(&html, &ByPosition::default()).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyTable));
    }

    #[test]
    fn test_nested_table_rows_stay_out() {
        let html = page(
            r#"<table>
              <tr><th>Produto</th><th>Notas</th></tr>
              <tr><td>Suco</td><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>"#,
        );
        let table = extract_table(&html, &ByPosition(3)).unwrap();
        assert_eq!(table.headers, vec!["Produto", "Notas"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Suco");
    }

    #[test]
    fn test_locate_by_header() {
        let html = page(
            r#"<table>
              <tr><th>Países</th><th>Quantidade (Kg)</th><th>Valor (US$)</th></tr>
              <tr><td>Alemanha</td><td>52297</td><td>85111</td></tr>
            </table>"#,
        );
        let locator = ByHeader::new(["Países", "Valor (US$)"]);
        let table = extract_table(&html, &locator).unwrap();
        assert_eq!(table.rows, vec![vec!["Alemanha", "52297", "85111"]]);
    }
}
