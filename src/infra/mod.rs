// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem access for the two startup artifacts. Nothing else
// in the program reads from disk.
//
//   artifacts.rs — ArtifactStore: resolves the artifact directory,
//                  reads pipe.json and df.json, and reports a
//                  missing file separately from an unusable one

/// Startup artifact loading
pub mod artifacts;
