// ============================================================
// Layer 5 — Decision Tree Model
// ============================================================
// Wraps linfa-trees' DecisionTree so the rest of the crate
// deals in plain `Vec<f64>` rows and `String` labels.
//
// linfa classifies into `usize` targets, so string labels are
// mapped onto indices into `classes` (sorted, unique) before
// fitting and mapped back after predicting. The whole struct
// is what gets serialised as the model artifact.

use std::fmt;

use linfa::traits::Predict;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;
use crate::domain::error::HarnessError;

/// A fitted decision-tree classifier plus what is needed to
/// translate between its index space and the original labels.
#[derive(Serialize, Deserialize)]
pub struct TreeClassifier {
    /// Sorted unique training labels; the tree predicts indices into this
    classes: Vec<String>,

    /// Feature width seen at training time
    n_features: usize,

    tree: DecisionTree<f64, usize>,
}

impl TreeClassifier {
    pub(crate) fn new(classes: Vec<String>, n_features: usize, tree: DecisionTree<f64, usize>) -> Self {
        Self { classes, n_features, tree }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn num_leaves(&self) -> usize {
        self.tree.num_leaves()
    }

    pub fn depth(&self) -> usize {
        self.tree.max_depth()
    }

    /// Predict one label per row, in row order.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<String>, HarnessError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let records = to_records(rows, self.n_features)?;
        let indices: Array1<usize> = self.tree.predict(&records);

        indices
            .iter()
            .map(|&idx| {
                self.classes.get(idx).cloned().ok_or_else(|| HarnessError::Fit {
                    reason: format!("tree predicted unknown class index {idx}"),
                })
            })
            .collect()
    }

    /// Fraction of rows in `dataset` whose label is predicted correctly.
    pub fn accuracy(&self, dataset: &Dataset) -> Result<f64, HarnessError> {
        if dataset.is_empty() {
            return Ok(0.0);
        }

        let predicted = self.predict(dataset.features())?;
        let correct   = predicted
            .iter()
            .zip(dataset.labels())
            .filter(|(p, l)| p == l)
            .count();

        Ok(correct as f64 / dataset.len() as f64)
    }
}

impl fmt::Debug for TreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeClassifier")
            .field("classes", &self.classes)
            .field("n_features", &self.n_features)
            .field("num_leaves", &self.num_leaves())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Pack rows into the (n_rows, width) matrix linfa expects.
/// Every row must be exactly `width` wide.
pub(crate) fn to_records(rows: &[Vec<f64>], width: usize) -> Result<Array2<f64>, HarnessError> {
    let mut flat = Vec::with_capacity(rows.len() * width);

    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(HarnessError::FeatureWidthMismatch {
                row,
                expected: width,
                found:    values.len(),
            });
        }
        flat.extend_from_slice(values);
    }

    Array2::from_shape_vec((rows.len(), width), flat)
        .map_err(|e| HarnessError::Fit { reason: e.to_string() })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_records_shape() {
        let records = to_records(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], 2).unwrap();
        assert_eq!(records.dim(), (3, 2));
        assert_eq!(records[[2, 1]], 6.0);
    }

    #[test]
    fn test_to_records_rejects_wrong_width() {
        let err = to_records(&[vec![1.0, 2.0], vec![3.0]], 2).unwrap_err();
        match err {
            HarnessError::FeatureWidthMismatch { row, expected, found } => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
