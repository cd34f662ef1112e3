// ============================================================
// Layer 3 — Failure Record
// ============================================================
// The text the job manager shows as the reason a training job
// failed. Built once from the error that ended the run.
//
// Layout:
//   Exception during training: <top-level message>
//   <full error chain, plus a backtrace when RUST_BACKTRACE is set>

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// Top-level error message, `Display` of the error
    pub message: String,

    /// Cause chain and backtrace, `Debug` of the error
    pub trace: String,
}

impl FailureRecord {
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            trace:   format!("{err:?}"),
        }
    }

    /// The exact text written to the failure file and echoed to stderr
    pub fn render(&self) -> String {
        format!("Exception during training: {}\n{}", self.message, self.trace)
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
