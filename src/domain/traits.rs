// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The orchestrator only needs "something that yields a labelled
// dataset". CsvDirLoader is the implementation used in the job
// container; tests can substitute an in-memory source.

use anyhow::Result;
use crate::domain::dataset::Dataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce the full training dataset.
///
/// Implementations:
///   - CsvDirLoader → concatenates every CSV file in a directory
pub trait DatasetSource {
    /// Load every available row from this source.
    fn load(&self) -> Result<Dataset>;
}
