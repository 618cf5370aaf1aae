// ============================================================
// Layer 5 — Column Encoder
// ============================================================
// Lays a labelled row out as the flat feature vector the
// estimator was fitted on. Columns are visited in the order the
// pipeline declares them:
//
//   category column → one indicator per known category
//                     (the first one dropped when drop_first)
//   numeric column  → its value, unchanged
//
// A category value the encoder has never seen encodes to all
// zeros, the same as the dropped first category.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::PredictError;
use crate::domain::record::{Cell, ColumnKind, Row};
use crate::ml::error::PipelineError;
use crate::ml::pipeline::ColumnSpec;

/// Encoder section of a pipeline artifact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncoderSpec {
    #[serde(default)]
    pub drop_first: bool,

    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
enum Block {
    OneHot { column: String, categories: Vec<String> },
    Passthrough { column: String },
}

/// The fitted encoder: a fixed sequence of blocks, one per column.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    blocks: Vec<Block>,
    width:  usize,
}

impl OneHotEncoder {
    /// Build the feature layout for `columns` from the encoder spec.
    pub fn from_spec(columns: &[ColumnSpec], spec: &EncoderSpec) -> Result<Self, PipelineError> {
        for name in spec.categories.keys() {
            let is_category = columns
                .iter()
                .any(|c| &c.name == name && c.kind == ColumnKind::Category);
            if !is_category {
                return Err(PipelineError::UnexpectedCategories(name.clone()));
            }
        }

        let mut blocks = Vec::with_capacity(columns.len());
        let mut width  = 0usize;

        for col in columns {
            match col.kind {
                ColumnKind::Category => {
                    let known = spec
                        .categories
                        .get(&col.name)
                        .ok_or_else(|| PipelineError::MissingCategories(col.name.clone()))?;
                    let kept: Vec<String> = if spec.drop_first {
                        known.iter().skip(1).cloned().collect()
                    } else {
                        known.clone()
                    };
                    width += kept.len();
                    blocks.push(Block::OneHot { column: col.name.clone(), categories: kept });
                }
                ColumnKind::Integer | ColumnKind::Float | ColumnKind::Flag => {
                    width += 1;
                    blocks.push(Block::Passthrough { column: col.name.clone() });
                }
            }
        }

        Ok(Self { blocks, width })
    }

    /// Number of features produced per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Feature names in layout order, e.g. `Company=Apple`, `Ram`.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width);
        for block in &self.blocks {
            match block {
                Block::OneHot { column, categories } => {
                    names.extend(categories.iter().map(|c| format!("{column}={c}")));
                }
                Block::Passthrough { column } => names.push(column.clone()),
            }
        }
        names
    }

    /// Encode one row. The row is expected to have passed the
    /// pipeline's schema check already.
    pub fn encode(&self, row: &Row) -> Result<Vec<f64>, PredictError> {
        let mut features = Vec::with_capacity(self.width);

        for block in &self.blocks {
            match block {
                Block::OneHot { column, categories } => {
                    let value = match row.get(column) {
                        Some(Cell::Text(v)) => v,
                        other => return Err(type_error(column, "category", other)),
                    };
                    features.extend(
                        categories.iter().map(|c| if c == value { 1.0 } else { 0.0 }),
                    );
                }
                Block::Passthrough { column } => {
                    let cell = row.get(column);
                    let value = cell
                        .and_then(Cell::as_f64)
                        .ok_or_else(|| type_error(column, "numeric", cell))?;
                    features.push(value);
                }
            }
        }

        Ok(features)
    }
}

fn type_error(column: &str, expected: &str, found: Option<&Cell>) -> PredictError {
    match found {
        Some(cell) => PredictError::Schema(format!(
            "column '{column}' expects a {expected} value, got {}",
            cell.type_name()
        )),
        None => PredictError::Schema(format!("missing column '{column}'")),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, kind: ColumnKind) -> ColumnSpec {
        ColumnSpec { name: name.to_string(), kind }
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            column("Company", ColumnKind::Category),
            column("Ram", ColumnKind::Integer),
            column("os", ColumnKind::Category),
        ]
    }

    fn spec(drop_first: bool) -> EncoderSpec {
        let mut categories = BTreeMap::new();
        categories.insert("Company".to_string(), vec!["Acer".into(), "Apple".into(), "HP".into()]);
        categories.insert("os".to_string(), vec!["Mac".into(), "Windows".into()]);
        EncoderSpec { drop_first, categories }
    }

    fn row(company: &str, ram: i64, os: &str) -> Row {
        let mut r = Row::new();
        r.insert("Company", Cell::Text(company.into()));
        r.insert("Ram", Cell::Int(ram));
        r.insert("os", Cell::Text(os.into()));
        r
    }

    #[test]
    fn test_layout_follows_column_order() {
        let enc = OneHotEncoder::from_spec(&columns(), &spec(false)).unwrap();
        assert_eq!(enc.width(), 6);
        assert_eq!(
            enc.feature_names(),
            vec!["Company=Acer", "Company=Apple", "Company=HP", "Ram", "os=Mac", "os=Windows"]
        );
        assert_eq!(
            enc.encode(&row("Apple", 8, "Mac")).unwrap(),
            vec![0.0, 1.0, 0.0, 8.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_drop_first_removes_leading_category() {
        let enc = OneHotEncoder::from_spec(&columns(), &spec(true)).unwrap();
        assert_eq!(enc.width(), 4);
        // "Acer" and "Mac" were dropped, so they encode as zeros
        assert_eq!(
            enc.encode(&row("Acer", 4, "Mac")).unwrap(),
            vec![0.0, 0.0, 4.0, 0.0]
        );
        assert_eq!(
            enc.encode(&row("HP", 16, "Windows")).unwrap(),
            vec![0.0, 1.0, 16.0, 1.0]
        );
    }

    #[test]
    fn test_unknown_category_encodes_to_zeros() {
        let enc = OneHotEncoder::from_spec(&columns(), &spec(false)).unwrap();
        let x = enc.encode(&row("Razer", 8, "Linux")).unwrap();
        assert_eq!(x, vec![0.0, 0.0, 0.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_category_list_is_rejected() {
        let mut s = spec(false);
        s.categories.remove("os");
        assert!(matches!(
            OneHotEncoder::from_spec(&columns(), &s),
            Err(PipelineError::MissingCategories(c)) if c == "os"
        ));
    }

    #[test]
    fn test_categories_for_numeric_column_are_rejected() {
        let mut s = spec(false);
        s.categories.insert("Ram".into(), vec!["8".into()]);
        assert!(matches!(
            OneHotEncoder::from_spec(&columns(), &s),
            Err(PipelineError::UnexpectedCategories(c)) if c == "Ram"
        ));
    }

    #[test]
    fn test_text_in_numeric_column_is_a_schema_error() {
        let enc = OneHotEncoder::from_spec(&columns(), &spec(false)).unwrap();
        let mut r = row("HP", 8, "Mac");
        r.insert("Ram", Cell::Text("eight".into()));
        assert!(matches!(enc.encode(&r), Err(PredictError::Schema(_))));
    }
}
