// ============================================================
// Layer 3 — Price Estimate
// ============================================================
// Pipelines are trained on log(price), so their raw output has
// to be mapped back with exp() and rounded to a whole amount.

use std::fmt;

use serde::Serialize;

use crate::domain::error::PredictError;

/// Label shown in front of every amount.
pub const CURRENCY: &str = "INR";

/// A price estimate together with the raw log-space output it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub log_value: f64,
    pub amount:    i64,
}

impl PriceEstimate {
    /// `amount = round(exp(log_value))`.
    ///
    /// Fails when the output is not finite or the price does not
    /// fit an integer amount.
    pub fn from_log(log_value: f64) -> Result<Self, PredictError> {
        if !log_value.is_finite() {
            return Err(PredictError::PriceOutOfRange { raw: log_value });
        }
        let price = log_value.exp().round();
        if !price.is_finite() || price >= i64::MAX as f64 {
            return Err(PredictError::PriceOutOfRange { raw: log_value });
        }
        Ok(Self { log_value, amount: price as i64 })
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted Price : {CURRENCY} {}", self.amount)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_log_rounds_to_nearest() {
        // exp(10.5) = 36315.502... which rounds up
        let est = PriceEstimate::from_log(10.5).unwrap();
        assert_eq!(est.amount, 36316);
        assert_eq!(est.amount, 10.5f64.exp().round() as i64);
    }

    #[test]
    fn test_zero_log_is_one() {
        assert_eq!(PriceEstimate::from_log(0.0).unwrap().amount, 1);
    }

    #[test]
    fn test_display_has_currency_label() {
        let est = PriceEstimate::from_log(10.5).unwrap();
        assert_eq!(est.to_string(), "Predicted Price : INR 36316");
    }

    #[test]
    fn test_non_finite_output_is_rejected() {
        assert!(PriceEstimate::from_log(f64::NAN).is_err());
        assert!(PriceEstimate::from_log(f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_price_is_rejected() {
        // exp(100) is far beyond any integer amount
        assert!(matches!(
            PriceEstimate::from_log(100.0),
            Err(PredictError::PriceOutOfRange { .. })
        ));
    }
}
