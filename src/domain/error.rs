// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Typed failures raised below the orchestrator. They travel
// upwards inside `anyhow::Error`, so callers that care about a
// particular kind can still `downcast_ref::<HarnessError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The training directory holds no regular files.
    #[error("There is no training data in '{}'", dir.display())]
    NoTrainingData { dir: PathBuf },

    /// Malformed CSV content: ragged rows, a non-numeric feature,
    /// or a feature width that changed between files.
    #[error("Cannot parse '{source_name}' at line {line}: {reason}")]
    DataParse {
        source_name: String,
        line:        u64,
        reason:      String,
    },

    #[error("Invalid hyperparameter '{key}': {reason}")]
    InvalidHyperparameter { key: String, reason: String },

    #[error("Cannot fit a model on an empty dataset")]
    EmptyDataset,

    #[error("Decision tree fitting failed: {reason}")]
    Fit { reason: String },

    /// Inference rows must have the width the model was trained on.
    #[error("Row {row} has {found} features but the model expects {expected}")]
    FeatureWidthMismatch {
        row:      usize,
        expected: usize,
        found:    usize,
    },

    /// The model artifact is absent or cannot be decoded.
    #[error("No usable model at '{}': {reason}", path.display())]
    ModelNotFound { path: PathBuf, reason: String },
}
