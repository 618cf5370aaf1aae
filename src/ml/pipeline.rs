// ============================================================
// Layer 5 — Fitted Pipeline
// ============================================================
// A pipeline artifact bundles everything needed to go from a
// labelled row to a log-price:
//
//   {
//     "format_version": 1,
//     "columns":   [{"name": "Company", "kind": "category"}, ...],
//     "encoder":   {"drop_first": true, "categories": {...}},
//     "estimator": {"type": "linear", "intercept": ..., "weights": [...]}
//   }
//
// Every request goes through the same three steps:
//   1. schema check: the row's column names and value types
//      must match "columns" exactly (order does not matter)
//   2. encode: OneHotEncoder lays the row out as features
//   3. estimate: the estimator maps features to one scalar

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::error::PredictError;
use crate::domain::record::{Cell, ColumnKind, Row};
use crate::domain::traits::PricePipeline;
use crate::ml::encoder::{EncoderSpec, OneHotEncoder};
use crate::ml::error::PipelineError;
use crate::ml::estimator::{Estimator, EstimatorSpec};

/// The only artifact layout this build understands.
pub const FORMAT_VERSION: u32 = 1;

/// One declared input column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    /// Whether `cell` is an acceptable value for this column.
    fn accepts(&self, cell: &Cell) -> bool {
        match (self.kind, cell) {
            (ColumnKind::Category, Cell::Text(_))            => true,
            (ColumnKind::Integer,  Cell::Int(_))             => true,
            (ColumnKind::Float,    Cell::Int(_) | Cell::Float(_)) => true,
            (ColumnKind::Flag,     Cell::Int(v))             => *v == 0 || *v == 1,
            _ => false,
        }
    }
}

/// On-disk shape of a pipeline artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineArtifact {
    pub format_version: u32,
    pub columns:        Vec<ColumnSpec>,
    #[serde(default)]
    pub encoder:        EncoderSpec,
    pub estimator:      EstimatorSpec,
}

/// A loaded, validated pipeline ready to serve predictions.
pub struct FittedPipeline {
    columns:   Vec<ColumnSpec>,
    encoder:   OneHotEncoder,
    estimator: Estimator,
}

impl FittedPipeline {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let artifact: PipelineArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: PipelineArtifact) -> Result<Self, PipelineError> {
        if artifact.format_version != FORMAT_VERSION {
            return Err(PipelineError::UnsupportedVersion {
                found:    artifact.format_version,
                expected: FORMAT_VERSION,
            });
        }
        if artifact.columns.is_empty() {
            return Err(PipelineError::NoColumns);
        }

        let mut names = HashSet::new();
        for col in &artifact.columns {
            if !names.insert(col.name.as_str()) {
                return Err(PipelineError::DuplicateColumn(col.name.clone()));
            }
        }

        let encoder   = OneHotEncoder::from_spec(&artifact.columns, &artifact.encoder)?;
        let estimator = Estimator::from_spec(artifact.estimator, encoder.width())?;

        tracing::debug!(
            "Pipeline ready: {} columns, {} features, {} estimator",
            artifact.columns.len(),
            encoder.width(),
            estimator.kind()
        );

        Ok(Self { columns: artifact.columns, encoder, estimator })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.encoder.feature_names()
    }

    pub fn estimator_kind(&self) -> &'static str {
        self.estimator.kind()
    }

    /// Names must match exactly; every declared column must be
    /// present with a value of the declared kind, and nothing else
    /// may be present.
    fn check_schema(&self, row: &Row) -> Result<(), PredictError> {
        for col in &self.columns {
            let cell = row
                .get(&col.name)
                .ok_or_else(|| PredictError::Schema(format!("missing column '{}'", col.name)))?;
            if !col.accepts(cell) {
                return Err(PredictError::Schema(format!(
                    "column '{}' expects {} but got {} value '{}'",
                    col.name,
                    col.kind,
                    cell.type_name(),
                    cell
                )));
            }
        }

        if let Some(extra) = row
            .columns()
            .find(|name| !self.columns.iter().any(|c| c.name == *name))
        {
            return Err(PredictError::Schema(format!("unexpected column '{extra}'")));
        }

        Ok(())
    }
}

impl PricePipeline for FittedPipeline {
    fn predict(&self, row: &Row) -> Result<f64, PredictError> {
        self.check_schema(row)?;
        let features = self.encoder.encode(row)?;
        let output   = self.estimator.predict(&features)?;

        if !output.is_finite() {
            return Err(PredictError::Inference(format!(
                "{} estimator returned {output}",
                self.estimator.kind()
            )));
        }
        Ok(output)
    }
}
