// src/record.rs

use serde_json::{Map, Value};

use crate::report::QueryTuple;
use crate::table::RawTable;

/// One output row: column name → scalar, plus the provenance fields.
pub type Record = Map<String, Value>;

pub const ABA: &str = "Aba";
pub const CATEGORIA: &str = "Categoria";
pub const ANO: &str = "Ano";

/// Turn a table into records stamped with `Aba`, `Categoria` and `Ano` for
/// `tuple`. A sub-category without a label gives `Categoria = null`.
pub fn label_rows(table: RawTable, tuple: &QueryTuple) -> Vec<Record> {
    let aba = Value::from(tuple.report.label());
    let categoria = tuple
        .category_label()
        .map(Value::from)
        .unwrap_or(Value::Null);
    let ano = Value::from(tuple.year);

    table
        .into_records()
        .into_iter()
        .map(|mut record| {
            record.insert(ABA.to_string(), aba.clone());
            record.insert(CATEGORIA.to_string(), categoria.clone());
            record.insert(ANO.to_string(), ano.clone());
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportType;
    use serde_json::json;

    fn one_row() -> RawTable {
        RawTable {
            headers: vec!["Produto".into(), "Quantidade (Kg)".into()],
            rows: vec![vec!["Tintas".into(), "35881118".into()]],
        }
    }

    #[test]
    fn test_processing_labels() {
        let tuple = QueryTuple {
            report: ReportType::Processing,
            sub_category: Some(1),
            year: 2015,
        };
        let records = label_rows(one_row(), &tuple);
        assert_eq!(
            Value::Object(records[0].clone()),
            json!({
                "Produto": "Tintas",
                "Quantidade (Kg)": 35881118,
                "Aba": "Processamento",
                "Categoria": "Viníferas",
                "Ano": 2015
            })
        );
    }

    #[test]
    fn test_production_has_null_categoria() {
        let tuple = QueryTuple {
            report: ReportType::Production,
            sub_category: None,
            year: 1970,
        };
        let records = label_rows(one_row(), &tuple);
        assert_eq!(records[0]["Aba"], json!("Produção"));
        assert!(records[0].contains_key("Categoria"));
        assert_eq!(records[0]["Categoria"], Value::Null);
        assert_eq!(records[0]["Ano"], json!(1970));
    }

    #[test]
    fn test_unknown_sub_category_keeps_rows() {
        let tuple = QueryTuple {
            report: ReportType::Export,
            sub_category: Some(9),
            year: 2000,
        };
        let records = label_rows(one_row(), &tuple);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Aba"], json!("Exportação"));
        assert_eq!(records[0]["Categoria"], Value::Null);
    }
}
