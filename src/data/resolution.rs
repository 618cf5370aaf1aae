// ============================================================
// Layer 4 — Screen Resolution
// ============================================================
// Resolutions arrive as text like "1920x1080". The only accepted
// shape is <digits>x<digits>, split on a lowercase literal 'x'.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::PredictError;

/// Horizontal and vertical pixel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width:  u32,
    pub height: u32,
}

impl Resolution {
    /// Length of the diagonal in pixels.
    pub fn diagonal_pixels(&self) -> f64 {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        (w * w + h * h).sqrt()
    }
}

impl FromStr for Resolution {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PredictError::Resolution { input: s.to_string() };

        let (w, h) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width  = parse_digits(w).ok_or_else(invalid)?;
        let height = parse_digits(h).ok_or_else(invalid)?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Only plain ASCII digits; rejects signs, spaces and a second 'x'.
fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
