// ============================================================
// Layer 6 — Failure Report Writer
// ============================================================
// Writes the FailureRecord where the job manager looks for it:
//
//   output/
//     failure      ← plain text, read back as the failure reason
//
// Only ever written on the training failure path.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::failure::FailureRecord;

/// Fixed file name of the failure report inside the output directory
pub const FAILURE_FILE_NAME: &str = "failure";

pub struct FailureReporter {
    output_dir: PathBuf,
}

impl FailureReporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn failure_path(&self) -> PathBuf {
        self.output_dir.join(FAILURE_FILE_NAME)
    }

    /// Write `record` to `{output_dir}/failure`, creating the directory if needed.
    pub fn write(&self, record: &FailureRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Cannot create output directory '{}'", self.output_dir.display())
        })?;

        let path = self.failure_path();
        fs::write(&path, record.render())
            .with_context(|| format!("Cannot write failure report to '{}'", path.display()))?;

        tracing::debug!("Wrote failure report to '{}'", path.display());
        Ok(path)
    }
}
