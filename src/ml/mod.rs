// ============================================================
// Layer 5 — ML / Pipeline Layer
// ============================================================
// Everything that turns a labelled row into a number lives here,
// and this is the only layer that imports burn.
//
//   pipeline.rs  — artifact format, schema check, PricePipeline impl
//   encoder.rs   — one-hot / passthrough feature layout
//   estimator.rs — linear, random forest and gradient boosting heads
//   linear.rs    — the linear head as a burn matmul
//   error.rs     — reasons an artifact is rejected at load time

pub mod pipeline;

pub mod encoder;

pub mod estimator;

pub mod linear;

pub mod error;
