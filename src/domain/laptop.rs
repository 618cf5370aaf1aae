// ============================================================
// Layer 3 — Laptop Form Input
// ============================================================
// LaptopSpec holds exactly what the user chose on the form,
// before anything is derived from it. Screen size and
// resolution stay separate here; they only become PPI when
// the predictor builds the query record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RAM sizes offered on the form, in GB.
pub const RAM_CHOICES: [u32; 9] = [2, 4, 6, 8, 12, 16, 24, 32, 64];

/// HDD capacities offered on the form, in GB.
pub const HDD_CHOICES: [u32; 6] = [0, 128, 256, 512, 1024, 2048];

/// SSD capacities offered on the form, in GB.
pub const SSD_CHOICES: [u32; 6] = [0, 8, 128, 256, 512, 1024];

/// Screen resolutions offered on the form, as `<width>x<height>`.
pub const RESOLUTION_CHOICES: [&str; 10] = [
    "1920x1080", "1920x1200", "1366x768", "1600x900", "3840x2160",
    "3200x1800", "2880x1800", "2560x1600", "2560x1440", "2304x1440",
];

/// A Yes/No dropdown answer (touchscreen, IPS panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    No,
    Yes,
}

impl YesNo {
    /// Both answers in the order the form lists them.
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    /// The 0/1 flag the pipeline was trained on.
    pub fn as_flag(self) -> i64 {
        match self {
            YesNo::Yes => 1,
            YesNo::No  => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No  => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The values collected from one submission of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopSpec {
    pub company:     String,
    pub type_name:   String,
    pub ram:         u32,
    pub weight:      f64,
    pub touchscreen: YesNo,
    pub ips:         YesNo,
    /// Diagonal in inches
    pub screen_size: f64,
    /// Kept as text; parsed at prediction time
    pub resolution:  String,
    pub cpu_brand:   String,
    pub hdd:         u32,
    pub ssd:         u32,
    pub gpu_brand:   String,
    pub os:          String,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_flags() {
        assert_eq!(YesNo::Yes.as_flag(), 1);
        assert_eq!(YesNo::No.as_flag(), 0);
    }

    #[test]
    fn test_yes_no_defaults_to_no() {
        // A fresh form shows "No" first
        assert_eq!(YesNo::default(), YesNo::No);
        assert_eq!(YesNo::ALL[0], YesNo::No);
    }

    #[test]
    fn test_choice_lists_match_form() {
        assert_eq!(RAM_CHOICES.first(), Some(&2));
        assert_eq!(RAM_CHOICES.last(), Some(&64));
        assert!(HDD_CHOICES.contains(&2048));
        assert!(SSD_CHOICES.contains(&8));
        assert!(RESOLUTION_CHOICES.iter().all(|r| r.contains('x')));
    }
}
