// ============================================================
// Layer 5 — Pipeline Load Errors
// ============================================================
// Reasons a pipeline artifact is rejected while it is being
// loaded. These are startup failures, never shown per request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unsupported pipeline format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("pipeline declares no input columns")]
    NoColumns,

    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("category column '{0}' has no category list in the encoder")]
    MissingCategories(String),

    #[error("encoder lists categories for '{0}', which is not a category column")]
    UnexpectedCategories(String),

    #[error("linear estimator has {actual} weights but the encoder produces {expected} features")]
    WeightCount { expected: usize, actual: usize },

    #[error("ensemble has no trees")]
    NoTrees,

    #[error("tree {tree}: {message}")]
    InvalidTree { tree: usize, message: String },

    #[error("estimator parameter {name} must be finite")]
    NonFinite { name: &'static str },
}
