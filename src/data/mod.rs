// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Turns headerless CSV into the domain Dataset.
//
//   training directory
//       │
//       ▼
//   CsvDirLoader      → lists files, concatenates them in order
//       │
//       ▼
//   parser            → one CSV stream → label + f64 features
//       │
//       ▼
//   Dataset           → handed to the ML layer
//
// Inference input goes through the same parser with column 0
// dropped instead of kept as a label.

/// Parses headerless CSV streams (training and inference layouts)
pub mod parser;

/// Concatenates every file in the training directory
pub mod loader;
