// ============================================================
// Layer 4 — Feature Derivation
// ============================================================
// Turns a LaptopSpec into the twelve-column QueryRecord:
//
//   1. Yes/No answers        → 0/1 flags
//   2. resolution string     → (width, height)
//   3. width, height, inches → PPI = sqrt(w² + h²) / inches
//
// Every other field is copied across unchanged.

use crate::data::resolution::Resolution;
use crate::domain::error::PredictError;
use crate::domain::laptop::LaptopSpec;
use crate::domain::record::QueryRecord;

/// Pixels per inch of a screen.
///
/// The diagonal must be a positive, finite number of inches; zero
/// would divide by zero and negative sizes have no meaning.
pub fn pixel_density(resolution: Resolution, screen_size: f64) -> Result<f64, PredictError> {
    if !screen_size.is_finite() || screen_size <= 0.0 {
        return Err(PredictError::ScreenSize { size: screen_size });
    }
    Ok(resolution.diagonal_pixels() / screen_size)
}

/// Builds query records from form input.
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, spec: &LaptopSpec) -> Result<QueryRecord, PredictError> {
        let resolution: Resolution = spec.resolution.parse()?;
        let ppi = pixel_density(resolution, spec.screen_size)?;

        tracing::debug!(
            "Derived PPI {:.2} from {} at {}\"",
            ppi,
            resolution,
            spec.screen_size
        );

        Ok(QueryRecord {
            company:      spec.company.clone(),
            type_name:    spec.type_name.clone(),
            ram:          i64::from(spec.ram),
            weight:       spec.weight,
            touch_screen: spec.touchscreen.as_flag(),
            ips:          spec.ips.as_flag(),
            ppi,
            cpu_brand:    spec.cpu_brand.clone(),
            hdd:          i64::from(spec.hdd),
            ssd:          i64::from(spec.ssd),
            gpu_brand:    spec.gpu_brand.clone(),
            os:           spec.os.clone(),
        })
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::laptop::YesNo;

    fn dell() -> LaptopSpec {
        LaptopSpec {
            company:     "Dell".into(),
            type_name:   "Notebook".into(),
            ram:         8,
            weight:      1.5,
            touchscreen: YesNo::No,
            ips:         YesNo::No,
            screen_size: 13.3,
            resolution:  "1920x1080".into(),
            cpu_brand:   "Intel".into(),
            hdd:         0,
            ssd:         256,
            gpu_brand:   "Intel".into(),
            os:          "Windows".into(),
        }
    }

    #[test]
    fn test_ppi_formula() {
        let res = Resolution { width: 1920, height: 1080 };
        let ppi = pixel_density(res, 13.3).unwrap();
        let expected = (1920f64.powi(2) + 1080f64.powi(2)).sqrt() / 13.3;
        assert_eq!(ppi, expected);
        assert!((ppi - 165.63).abs() < 0.01);
    }

    #[test]
    fn test_ppi_is_positive_for_every_offered_resolution() {
        for r in crate::domain::laptop::RESOLUTION_CHOICES {
            let res: Resolution = r.parse().unwrap();
            for size in [10.1, 13.3, 15.6, 17.3] {
                assert!(pixel_density(res, size).unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_zero_screen_size_is_an_error() {
        let res = Resolution { width: 1920, height: 1080 };
        assert_eq!(
            pixel_density(res, 0.0),
            Err(PredictError::ScreenSize { size: 0.0 })
        );
    }

    #[test]
    fn test_negative_and_nan_screen_sizes_are_errors() {
        let res = Resolution { width: 1920, height: 1080 };
        assert!(pixel_density(res, -13.3).is_err());
        assert!(pixel_density(res, f64::NAN).is_err());
    }

    #[test]
    fn test_builds_record_with_flags() {
        let mut spec = dell();
        spec.touchscreen = YesNo::Yes;
        let rec = RecordBuilder::new().build(&spec).unwrap();
        assert_eq!(rec.touch_screen, 1);
        assert_eq!(rec.ips, 0);
        assert_eq!(rec.ram, 8);
        assert_eq!(rec.ssd, 256);
        assert_eq!(rec.company, "Dell");
        assert!((rec.ppi - 165.63).abs() < 0.01);
    }

    #[test]
    fn test_bad_resolution_fails_before_ppi() {
        let mut spec = dell();
        spec.resolution = "1920*1080".into();
        spec.screen_size = 0.0;
        // The resolution is parsed first, so that error wins
        assert!(matches!(
            RecordBuilder::new().build(&spec),
            Err(PredictError::Resolution { .. })
        ));
    }
}
