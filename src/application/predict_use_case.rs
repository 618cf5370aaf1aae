// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// One submission of the form, start to finish:
//
//   Step 1: Yes/No → 0/1                    (Layer 4 - data)
//   Step 2: parse "<w>x<h>"                 (Layer 4 - data)
//   Step 3: PPI = sqrt(w² + h²) / inches    (Layer 4 - data)
//   Step 4: label the twelve fields         (Layer 3 - domain)
//   Step 5: pipeline.predict(row)           (Layer 5 - ml)
//   Step 6: price = round(exp(output))      (Layer 3 - domain)
//
// Rendering (step 7) belongs to Layer 1; this use case hands back
// either an estimate or the error to show. Nothing is kept
// between submissions.

use std::fmt;

use crate::data::features::RecordBuilder;
use crate::domain::error::PredictError;
use crate::domain::laptop::LaptopSpec;
use crate::domain::price::PriceEstimate;
use crate::domain::traits::PricePipeline;

/// The result of one submission, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Price(PriceEstimate),
    Failed(PredictError),
}

impl PredictionOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, PredictionOutcome::Failed(_))
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionOutcome::Price(estimate) => write!(f, "{estimate}"),
            PredictionOutcome::Failed(err)     => write!(f, "Error in prediction: {err}"),
        }
    }
}

/// Owns the loaded pipeline for the lifetime of the process.
pub struct PredictUseCase<P> {
    pipeline: P,
    builder:  RecordBuilder,
}

impl<P: PricePipeline> PredictUseCase<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline, builder: RecordBuilder::new() }
    }

    /// Derive the model record, run the pipeline, and convert its
    /// output back to a price.
    pub fn estimate(&self, spec: &LaptopSpec) -> Result<PriceEstimate, PredictError> {
        let record = self.builder.build(spec)?;
        let row    = record.into_row();

        let raw = self.pipeline.predict(&row)?;
        tracing::debug!("Pipeline output (log price): {raw:.6}");

        PriceEstimate::from_log(raw)
    }

    /// Like [`estimate`](Self::estimate), but never fails: errors come
    /// back as an outcome to show next to the form.
    pub fn submit(&self, spec: &LaptopSpec) -> PredictionOutcome {
        match self.estimate(spec) {
            Ok(estimate) => {
                tracing::info!("Estimated {} {}", crate::domain::price::CURRENCY, estimate.amount);
                PredictionOutcome::Price(estimate)
            }
            Err(err) if err.is_input_error() => {
                tracing::info!("Rejected input: {err}");
                PredictionOutcome::Failed(err)
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                PredictionOutcome::Failed(err)
            }
        }
    }
}
