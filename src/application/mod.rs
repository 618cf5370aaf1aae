// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers; does no parsing, maths or
// drawing of its own.
//
//   predict_use_case.rs — one form submission → price or error
//   form_options.rs     — the choices each dropdown offers

/// Form submission → price estimate
pub mod predict_use_case;

/// Dropdown choices from the reference table and fixed lists
pub mod form_options;
