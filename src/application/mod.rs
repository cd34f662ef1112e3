// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no CSV parsing, no linfa calls,
// no argument parsing. Each use case wires Layers 4–6 together
// for one job.

// The training job: hyperparameters → data → fit → save
pub mod train_use_case;

// Inference with a previously saved model
pub mod predict_use_case;
