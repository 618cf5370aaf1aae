// ============================================================
// Layer 3 — Query Record
// ============================================================
// The single row a pipeline is asked to price. Column names
// must match the names the pipeline was trained with byte for
// byte, including case and the spaces in "Cpu Brand" and
// "Gpu Brand", so they live here as constants and nowhere else.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const COMPANY:      &str = "Company";
pub const TYPE_NAME:    &str = "TypeName";
pub const RAM:          &str = "Ram";
pub const WEIGHT:       &str = "Weight";
pub const TOUCH_SCREEN: &str = "TouchScreen";
pub const IPS:          &str = "IPS";
pub const PPI:          &str = "PPI";
pub const CPU_BRAND:    &str = "Cpu Brand";
pub const HDD:          &str = "HDD";
pub const SSD:          &str = "SSD";
pub const GPU_BRAND:    &str = "Gpu Brand";
pub const OS:           &str = "os";

/// Category columns whose choices come from the reference table.
pub const CATEGORY_COLUMNS: [&str; 5] = [COMPANY, TYPE_NAME, CPU_BRAND, GPU_BRAND, OS];

/// The declared type of one pipeline input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Category,
    Integer,
    Float,
    /// Integer restricted to 0 or 1
    Flag,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnKind::Category => "category",
            ColumnKind::Integer  => "integer",
            ColumnKind::Float    => "float",
            ColumnKind::Flag     => "flag",
        };
        f.write_str(s)
    }
}

/// One value in a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    /// Numeric view of the cell; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v)   => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(_)  => None,
        }
    }

    /// Short type name used in schema error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Text(_)  => "text",
            Cell::Int(_)   => "integer",
            Cell::Float(_) => "float",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s)  => f.write_str(s),
            Cell::Int(v)   => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A single labelled row. Lookup is by name; column order carries
/// no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: Cell) {
        self.cells.insert(column.into(), cell);
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    #[cfg(test)]
    pub fn remove(&mut self, column: &str) -> Option<Cell> {
        self.cells.remove(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// The twelve-field record built on submit and consumed by one
/// prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    pub company:      String,
    pub type_name:    String,
    pub ram:          i64,
    pub weight:       f64,
    pub touch_screen: i64,
    pub ips:          i64,
    pub ppi:          f64,
    pub cpu_brand:    String,
    pub hdd:          i64,
    pub ssd:          i64,
    pub gpu_brand:    String,
    pub os:           String,
}

impl QueryRecord {
    /// Label every field with its trained column name.
    pub fn into_row(self) -> Row {
        let mut row = Row::new();
        row.insert(COMPANY,      Cell::Text(self.company));
        row.insert(TYPE_NAME,    Cell::Text(self.type_name));
        row.insert(RAM,          Cell::Int(self.ram));
        row.insert(WEIGHT,       Cell::Float(self.weight));
        row.insert(TOUCH_SCREEN, Cell::Int(self.touch_screen));
        row.insert(IPS,          Cell::Int(self.ips));
        row.insert(PPI,          Cell::Float(self.ppi));
        row.insert(CPU_BRAND,    Cell::Text(self.cpu_brand));
        row.insert(HDD,          Cell::Int(self.hdd));
        row.insert(SSD,          Cell::Int(self.ssd));
        row.insert(GPU_BRAND,    Cell::Text(self.gpu_brand));
        row.insert(OS,           Cell::Text(self.os));
        row
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryRecord {
        QueryRecord {
            company:      "Dell".into(),
            type_name:    "Notebook".into(),
            ram:          8,
            weight:       1.5,
            touch_screen: 0,
            ips:          0,
            ppi:          165.63,
            cpu_brand:    "Intel".into(),
            hdd:          0,
            ssd:          256,
            gpu_brand:    "Intel".into(),
            os:           "Windows".into(),
        }
    }

    #[test]
    fn test_row_has_exactly_twelve_named_columns() {
        let row = sample().into_row();
        assert_eq!(row.len(), 12);
        for name in [COMPANY, TYPE_NAME, RAM, WEIGHT, TOUCH_SCREEN, IPS,
                     PPI, CPU_BRAND, HDD, SSD, GPU_BRAND, OS] {
            assert!(row.get(name).is_some(), "missing column {name}");
        }
    }

    #[test]
    fn test_column_names_are_exact() {
        // Spacing and case are part of the trained schema
        assert_eq!(CPU_BRAND, "Cpu Brand");
        assert_eq!(GPU_BRAND, "Gpu Brand");
        assert_eq!(OS, "os");
        let row = sample().into_row();
        assert!(row.get("cpu brand").is_none());
    }

    #[test]
    fn test_cells_keep_their_types() {
        let row = sample().into_row();
        assert_eq!(row.get(RAM), Some(&Cell::Int(8)));
        assert_eq!(row.get(WEIGHT), Some(&Cell::Float(1.5)));
        assert_eq!(row.get(COMPANY), Some(&Cell::Text("Dell".into())));
        assert_eq!(row.get(TOUCH_SCREEN).and_then(Cell::as_f64), Some(0.0));
    }

    #[test]
    fn test_column_kind_parses_lowercase() {
        let kind: ColumnKind = serde_json::from_str("\"flag\"").unwrap();
        assert_eq!(kind, ColumnKind::Flag);
        assert_eq!(kind.to_string(), "flag");
    }
}
