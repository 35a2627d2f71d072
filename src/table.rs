// src/table.rs
//
// Flatten heterogeneous dataset records into a rectangular table.
// Pass 1 collects the ordered union of keys, pass 2 emits one row per record.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// One dataset item. Key order is the payload's order (serde_json `preserve_order`).
pub type Record = Map<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_records(records: &[Record]) -> Self {
        let columns = collect_columns(records);

        let rows = records
            .iter()
            .map(|rec| {
                columns
                    .iter()
                    .map(|col| rec.get(col).map(render_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// First `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Union of keys across all records, in first-seen order.
pub fn collect_columns(records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::new();
    for rec in records {
        for key in rec.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Cell text for one JSON value.
/// Strings are unquoted, null is empty, arrays/objects stay compact JSON.
pub fn render_cell(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}
