// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what the harness works with:
// a labelled dataset, a set of hyperparameters, the failure
// record written when training dies, and the error kinds
// every other layer reports.
//
// Rules for this layer:
//   - NO linfa / ndarray types here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits

// Labelled rows of numeric features
pub mod dataset;

// Tagged hyperparameter values and the set that holds them
pub mod hyperparameters;

// Diagnostic text written on the training failure path
pub mod failure;

// Error kinds shared by all layers
pub mod error;

// Core abstractions that other layers implement
pub mod traits;
