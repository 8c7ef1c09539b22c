use serde_json::Value;
use std::collections::HashMap;

/// Collapse every whitespace run (including non-breaking spaces) into a
/// single space and trim the ends.
pub fn clean_str(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Type shared by every cell of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Infer one type for a whole column from its cleaned cells. Empty cells
/// are ignored; a single non-numeric cell makes the column `Text`.
pub fn infer_column<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    for s in cells.into_iter().filter(|s| !s.is_empty()) {
        if kind == ColumnKind::Integer && s.parse::<i64>().is_ok() {
            continue;
        }
        if parse_float(s).is_some() {
            kind = ColumnKind::Float;
            continue;
        }
        return ColumnKind::Text;
    }
    kind
}

/// Convert a cleaned cell to the JSON scalar of its column. Empty → null.
pub fn to_scalar(kind: ColumnKind, s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    match kind {
        ColumnKind::Integer => s
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(s.to_string())),
        ColumnKind::Float => parse_float(s)
            .map(Value::from)
            .unwrap_or_else(|| Value::String(s.to_string())),
        ColumnKind::Text => Value::String(s.to_string()),
    }
}

/// Make header names unique. Repeats get `.1`, `.2`, … suffixes and blank
/// headers become `Unnamed: <index>`.
pub fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .enumerate()
        .map(|(i, name)| {
            let name = if name.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                name
            };
            let count = seen.entry(name.clone()).or_insert(0);
            let out = if *count == 0 {
                name
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            out
        })
        .collect()
}
