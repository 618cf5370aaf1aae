// ============================================================
// Layer 5 — Linear Regressor (burn)
// ============================================================
// intercept + x · w evaluated as a [1, n] × [n, 1] matmul on
// burn's CPU backend in f64. The weight column is built once when the
// pipeline loads and reused for every request.

use burn::backend::ndarray::NdArrayDevice;
use burn::prelude::*;

use crate::domain::error::PredictError;

type InferBackend = burn::backend::NdArray<f64>;

pub struct LinearRegressor {
    weights:    Tensor<InferBackend, 2>,
    intercept:  f64,
    n_features: usize,
    device:     NdArrayDevice,
}

impl LinearRegressor {
    pub fn new(intercept: f64, weights: &[f64]) -> Self {
        let device     = NdArrayDevice::default();
        let n_features = weights.len();
        let weights = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(weights.to_vec(), [n_features, 1]),
            &device,
        );
        Self { weights, intercept, n_features, device }
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.n_features {
            return Err(PredictError::Inference(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }
        if self.n_features == 0 {
            return Ok(self.intercept);
        }

        let input = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(features.to_vec(), [1, self.n_features]),
            &self.device,
        );

        let output = input
            .matmul(self.weights.clone())
            .add_scalar(self.intercept);

        let values: Vec<f64> = output
            .into_data()
            .to_vec::<f64>()
            .map_err(|e| PredictError::Inference(format!("reading model output: {e:?}")))?;

        values
            .first()
            .copied()
            .ok_or_else(|| PredictError::Inference("model produced no output".into()))
    }
}
