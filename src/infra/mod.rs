// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the job container's filesystem apart
// from reading training data:
//
//   checkpoint.rs      — ModelStore: writes and reads the single
//                        model artifact in the model directory
//
//   hyperparameters.rs — HyperparameterResolver: reads the
//                        hyperparameter JSON file, re-decodes
//                        stringified values, merges overrides
//
//   failure_report.rs  — FailureReporter: writes the failure
//                        file into the output directory

/// Model artifact saving and loading
pub mod checkpoint;

/// Hyperparameter file resolution
pub mod hyperparameters;

/// Failure file writer
pub mod failure_report;
