// ============================================================
// Layer 5 — ML / Model Layer (linfa)
// ============================================================
// All linfa and ndarray code lives here. Other layers only see
// `Vec<f64>` rows, `String` labels and TreeClassifier.
//
//   model.rs      — TreeClassifier: fitted tree + class list,
//                   prediction, the serialised artifact
//
//   trainer.rs    — fit(): label encoding, max_leaf_nodes,
//                   the linfa-trees call
//
//   inferencer.rs — CSV in, predicted labels out

/// Fitted decision tree and its label mapping
pub mod model;

/// Decision tree fitting
pub mod trainer;

/// Inference over headerless CSV
pub mod inferencer;
