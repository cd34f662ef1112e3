// ============================================================
// Layer 3 — Dataset Domain Type
// ============================================================
// One labelled table: a categorical label per row plus a
// fixed-width vector of numeric features.
//
// Invariant: every row has the same feature width (at least 1).
// The width is fixed by the first row pushed.

use crate::domain::error::HarnessError;

/// Labels and features, row-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    labels:   Vec<String>,
    features: Vec<Vec<f64>>,
}

impl Dataset {
    /// Create an empty dataset; the feature width is set by the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    ///
    /// `source_name` and `line` only feed the error message when the
    /// row breaks the width invariant.
    pub fn push_row(
        &mut self,
        label:       impl Into<String>,
        features:    Vec<f64>,
        source_name: &str,
        line:        u64,
    ) -> Result<(), HarnessError> {
        if features.is_empty() {
            return Err(HarnessError::DataParse {
                source_name: source_name.to_string(),
                line,
                reason: "row has a label but no feature columns".to_string(),
            });
        }
        if let Some(width) = self.feature_width() {
            if features.len() != width {
                return Err(HarnessError::DataParse {
                    source_name: source_name.to_string(),
                    line,
                    reason: format!(
                        "expected {} feature columns, found {}",
                        width,
                        features.len()
                    ),
                });
            }
        }
        self.labels.push(label.into());
        self.features.push(features);
        Ok(())
    }

    /// Append every row of `other`, keeping its order.
    pub fn extend(&mut self, other: Dataset, source_name: &str) -> Result<(), HarnessError> {
        for (line, (label, row)) in other.labels.into_iter().zip(other.features).enumerate() {
            self.push_row(label, row, source_name, line as u64 + 1)?;
        }
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of feature columns, or `None` while the dataset is empty.
    pub fn feature_width(&self) -> Option<usize> {
        self.features.first().map(Vec::len)
    }
}
