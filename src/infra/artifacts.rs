// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the two static artifacts the program needs before it can
// show a form:
//
//   artifacts/
//     pipe.json   ← fitted pipeline (encoder + estimator)
//     df.json     ← reference table for the dropdowns
//
// Both are read once at startup and never touched again. A
// missing file and a file that cannot be used are reported
// differently, and either one stops the program before any
// input is collected.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::reference::ReferenceTable;
use crate::domain::record::CATEGORY_COLUMNS;
use crate::ml::pipeline::FittedPipeline;

pub const DEFAULT_MODEL_FILE: &str = "pipe.json";
pub const DEFAULT_DATA_FILE:  &str = "df.json";

/// Where to find the artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub dir:        PathBuf,
    pub model_file: String,
    pub data_file:  String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir:        PathBuf::from("."),
            model_file: DEFAULT_MODEL_FILE.to_string(),
            data_file:  DEFAULT_DATA_FILE.to_string(),
        }
    }
}

/// Which of the two artifacts an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Data,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Model => f.write_str("model"),
            ArtifactKind::Data  => f.write_str("data"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("The {kind} file '{file}' is missing. Please ensure it is in the project directory.")]
    Missing {
        kind: ArtifactKind,
        file: String,
        path: PathBuf,
    },

    #[error("An error occurred while loading the {kind}: {message}")]
    Corrupt {
        kind:    ArtifactKind,
        path:    PathBuf,
        message: String,
    },
}

/// Both artifacts, loaded and validated.
pub struct Artifacts {
    pub pipeline:  FittedPipeline,
    pub reference: ReferenceTable,
}

pub struct ArtifactStore {
    config: ArtifactConfig,
}

impl ArtifactStore {
    pub fn new(config: ArtifactConfig) -> Self {
        Self { config }
    }

    pub fn model_path(&self) -> PathBuf {
        self.config.dir.join(&self.config.model_file)
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.dir.join(&self.config.data_file)
    }

    /// Load the pipeline, then the reference table. Stops at the
    /// first failure.
    pub fn load(&self) -> Result<Artifacts, ArtifactError> {
        let pipeline  = self.load_pipeline()?;
        let reference = self.load_reference()?;
        Ok(Artifacts { pipeline, reference })
    }

    pub fn load_pipeline(&self) -> Result<FittedPipeline, ArtifactError> {
        let path = self.model_path();
        let json = read_artifact(ArtifactKind::Model, &self.config.model_file, &path)?;

        let pipeline = FittedPipeline::from_json(&json).map_err(|e| ArtifactError::Corrupt {
            kind:    ArtifactKind::Model,
            path:    path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(
            "Loaded {} pipeline from '{}' ({} input columns)",
            pipeline.estimator_kind(),
            path.display(),
            pipeline.columns().len()
        );
        tracing::debug!("Pipeline features: {}", pipeline.feature_names().join(", "));
        Ok(pipeline)
    }

    pub fn load_reference(&self) -> Result<ReferenceTable, ArtifactError> {
        let path = self.data_path();
        let json = read_artifact(ArtifactKind::Data, &self.config.data_file, &path)?;

        let corrupt = |message: String| ArtifactError::Corrupt {
            kind: ArtifactKind::Data,
            path: path.clone(),
            message,
        };

        let table = ReferenceTable::from_json(&json).map_err(|e| corrupt(format!("{e:#}")))?;
        if table.is_empty() {
            return Err(corrupt("reference table has no rows".into()));
        }

        // Every dropdown needs its column
        if let Some(missing) = CATEGORY_COLUMNS.iter().find(|c| !table.has_column(c)) {
            return Err(corrupt(format!("reference table has no '{missing}' column")));
        }

        tracing::info!(
            "Loaded reference table from '{}' ({} rows)",
            path.display(),
            table.len()
        );
        Ok(table)
    }
}

/// Read an artifact as text, telling "not there" apart from
/// "there but unreadable".
fn read_artifact(kind: ArtifactKind, file: &str, path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArtifactError::Missing {
            kind,
            file: file.to_string(),
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Corrupt {
            kind,
            path:    path.to_path_buf(),
            message: e.to_string(),
        },
    })
}
