// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that describe what a
// price estimate is made of. Nothing in here touches the
// filesystem, the terminal, or burn.
//
//   laptop.rs  — the raw form values a user picks (LaptopSpec)
//                and the fixed choice lists for dropdowns
//   record.rs  — the twelve-column query record and the Row
//                shape handed to a pipeline
//   price.rs   — the estimate produced from a log-space output
//   error.rs   — recoverable prediction errors
//   traits.rs  — PricePipeline and CategorySource, the two
//                capabilities the loaded artifacts provide

/// Form input and fixed choice lists
pub mod laptop;

/// Query record, row and column schema types
pub mod record;

/// Price estimate (inverse log transform)
pub mod price;

/// Recoverable prediction errors
pub mod error;

/// Capabilities implemented by the loaded artifacts
pub mod traits;
