// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two loaded artifacts are only ever used through these
// traits, so the application layer never needs to know they
// came from JSON files. Tests swap in fixed pipelines and
// in-memory tables.

use anyhow::Result;

use crate::domain::error::PredictError;
use crate::domain::record::Row;

// ─── PricePipeline ────────────────────────────────────────────────────────────
/// A fitted transform-and-predict unit mapping one labelled row to
/// a scalar in log-price space.
///
/// Implementations:
///   - FittedPipeline → encoder + linear / tree-ensemble estimator
pub trait PricePipeline {
    /// Predict the log-space price for a single row.
    fn predict(&self, row: &Row) -> Result<f64, PredictError>;
}

// ─── CategorySource ───────────────────────────────────────────────────────────
/// Anything that can list the valid values of a category column.
///
/// Implementations:
///   - ReferenceTable → distinct values of a loaded dataset
pub trait CategorySource {
    /// Distinct values of `column`, first-seen order, no duplicates.
    fn distinct_values(&self, column: &str) -> Result<Vec<String>>;
}

impl<T: PricePipeline + ?Sized> PricePipeline for Box<T> {
    fn predict(&self, row: &Row) -> Result<f64, PredictError> {
        (**self).predict(row)
    }
}

impl<T: CategorySource + ?Sized> CategorySource for Box<T> {
    fn distinct_values(&self, column: &str) -> Result<Vec<String>> {
        (**self).distinct_values(column)
    }
}
