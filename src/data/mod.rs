// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between raw form values and a labelled row, plus
// the reference table that feeds the dropdowns:
//
//   LaptopSpec
//       │
//       ▼
//   Resolution::from_str   → (width, height) or a parse error
//       │
//       ▼
//   pixel_density          → PPI, rejecting a zero screen size
//       │
//       ▼
//   RecordBuilder          → twelve-column QueryRecord
//
//   ReferenceTable         → distinct category values per column

/// Parses "<width>x<height>" strings
pub mod resolution;

/// PPI derivation and query record assembly
pub mod features;

/// Records-oriented reference dataset
pub mod reference;
