// ============================================================
// Layer 4 — Reference Table
// ============================================================
// The dataset the pipeline was trained on, kept only so the
// form can offer every category the model has seen. It is a
// JSON array of row objects, the shape pandas writes with
// `to_json(orient="records")`:
//
//   [
//     {"Company": "Apple", "TypeName": "Ultrabook", "Ram": 8, ...},
//     {"Company": "HP",    "TypeName": "Notebook",  "Ram": 8, ...}
//   ]

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use crate::domain::traits::CategorySource;

/// An in-memory, read-only table of rows.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    rows: Vec<Map<String, Value>>,
}

impl ReferenceTable {
    /// Parse a records-oriented JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .context("reference table is not valid JSON")?;

        let Value::Array(items) = value else {
            bail!("reference table must be a JSON array of row objects");
        };

        let mut rows = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(row) => rows.push(row),
                other => bail!("row {i} of the reference table is not an object: {other}"),
            }
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if at least one row carries `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.rows.iter().any(|r| r.contains_key(column))
    }
}

impl CategorySource for ReferenceTable {
    fn distinct_values(&self, column: &str) -> Result<Vec<String>> {
        if !self.has_column(column) {
            bail!("column '{column}' not found in reference table");
        }

        let mut seen   = HashSet::new();
        let mut values = Vec::new();

        for row in &self.rows {
            let Some(text) = row.get(column).and_then(cell_text) else {
                continue;
            };
            if seen.insert(text.clone()) {
                values.push(text);
            }
        }
        Ok(values)
    }
}

/// Render a JSON cell as a dropdown label. Nulls (pandas NaN) are
/// skipped.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null      => None,
        Value::String(s) => Some(s.clone()),
        other            => Some(other.to_string()),
    }
}
