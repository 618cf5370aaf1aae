// ============================================================
// Layer 3 — Prediction Errors
// ============================================================
// Everything that can go wrong between pressing "predict" and
// seeing a price. All of these are recoverable: the caller
// shows the message and the form stays usable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("invalid screen resolution '{input}': expected <width>x<height>, e.g. 1920x1080")]
    Resolution { input: String },

    #[error("screen size must be greater than zero to compute pixel density (got {size})")]
    ScreenSize { size: f64 },

    #[error("'{input}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("record does not match the pipeline schema: {0}")]
    Schema(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model output {raw} does not map to a representable price")]
    PriceOutOfRange { raw: f64 },
}

impl PredictError {
    /// True for errors caused by what the user typed, as opposed to
    /// the pipeline rejecting or failing on the record.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PredictError::Resolution { .. }
                | PredictError::ScreenSize { .. }
                | PredictError::InvalidNumber { .. }
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_input() {
        let err = PredictError::Resolution { input: "1920-1080".into() };
        assert!(err.to_string().contains("1920-1080"));

        let err = PredictError::ScreenSize { size: 0.0 };
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_input_vs_inference_errors() {
        assert!(PredictError::ScreenSize { size: 0.0 }.is_input_error());
        assert!(!PredictError::Schema("missing column 'PPI'".into()).is_input_error());
        assert!(!PredictError::Inference("boom".into()).is_input_error());
    }
}
