// ============================================================
// Layer 5 — Decision Tree Fitting
// ============================================================
// Fits a Gini decision tree with linfa-trees.
//
// Only one hyperparameter is honoured: `max_leaf_nodes`
// (absent or null = unbounded, otherwise an integer >= 2).
// linfa-trees limits depth, not leaves, so a leaf cap is met by
// keeping the deepest depth-limited tree whose leaf count is
// still within the cap. A depth-1 tree never has more than two
// leaves, so a cap >= 2 is always satisfiable.
//
// Every other hyperparameter is ignored.

use std::collections::BTreeSet;

use anyhow::Result;
use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};

use crate::domain::error::HarnessError;
use crate::domain::hyperparameters::{HyperValue, HyperparameterSet};
use crate::ml::model::{to_records, TreeClassifier};

/// Name of the only hyperparameter the tree reads
pub const MAX_LEAF_NODES: &str = "max_leaf_nodes";

type TrainingSet = DatasetBase<Array2<f64>, Array1<usize>>;

/// The tree settings derived from a HyperparameterSet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeParams {
    /// `None` grows the tree until every leaf is pure
    pub max_leaf_nodes: Option<usize>,
}

impl TreeParams {
    pub fn from_hyperparameters(hyperparameters: &HyperparameterSet) -> Result<Self, HarnessError> {
        let invalid = |reason: String| HarnessError::InvalidHyperparameter {
            key: MAX_LEAF_NODES.to_string(),
            reason,
        };

        let max_leaf_nodes = match hyperparameters.get(MAX_LEAF_NODES) {
            None | Some(HyperValue::Null) => None,
            Some(HyperValue::Integer(n)) if *n >= 2 => Some(*n as usize),
            Some(HyperValue::Integer(n)) => {
                return Err(invalid(format!("must be at least 2, got {n}")));
            }
            Some(other) => {
                return Err(invalid(format!(
                    "expected an integer or null, got {} {}",
                    other.kind(),
                    other
                )));
            }
        };

        for (key, _) in hyperparameters.iter().filter(|(k, _)| k.as_str() != MAX_LEAF_NODES) {
            tracing::debug!("Ignoring hyperparameter '{}'", key);
        }

        Ok(Self { max_leaf_nodes })
    }
}

/// Fit a decision tree to `features` (one row per label).
pub fn fit(
    features:        &[Vec<f64>],
    labels:          &[String],
    hyperparameters: &HyperparameterSet,
) -> Result<TreeClassifier> {
    let params = TreeParams::from_hyperparameters(hyperparameters)?;

    if features.is_empty() {
        return Err(HarnessError::EmptyDataset.into());
    }
    if features.len() != labels.len() {
        return Err(HarnessError::Fit {
            reason: format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            ),
        }
        .into());
    }

    // ── Encode labels as class indices ───────────────────────────────────────
    let classes: Vec<String> = labels
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let targets: Array1<usize> = labels
        .iter()
        .map(|l| classes.binary_search(l).unwrap_or_default())
        .collect();

    let n_features = features[0].len();
    let records    = to_records(features, n_features)?;
    let dataset    = DatasetBase::new(records, targets);

    tracing::info!(
        "Fitting decision tree: {} rows, {} features, {} classes, max_leaf_nodes={}",
        labels.len(),
        n_features,
        classes.len(),
        params
            .max_leaf_nodes
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    let tree = match params.max_leaf_nodes {
        None        => fit_tree(&dataset, None)?,
        Some(limit) => fit_within_leaf_limit(&dataset, limit)?,
    };

    tracing::info!(
        "Fitted tree: depth {}, {} leaves",
        tree.max_depth(),
        tree.num_leaves()
    );

    Ok(TreeClassifier::new(classes, n_features, tree))
}

fn fit_tree(
    dataset:   &TrainingSet,
    max_depth: Option<usize>,
) -> Result<DecisionTree<f64, usize>, HarnessError> {
    DecisionTree::<f64, usize>::params()
        .max_depth(max_depth)
        .fit(dataset)
        .map_err(|e| HarnessError::Fit { reason: e.to_string() })
}

/// Deepest depth-limited tree with at most `limit` leaves.
fn fit_within_leaf_limit(
    dataset: &TrainingSet,
    limit:   usize,
) -> Result<DecisionTree<f64, usize>, HarnessError> {
    let full = fit_tree(dataset, None)?;
    if full.num_leaves() <= limit {
        return Ok(full);
    }

    let mut best = None;
    for depth in 1..=full.max_depth() {
        let tree = fit_tree(dataset, Some(depth))?;
        if tree.num_leaves() > limit {
            break;
        }
        tracing::debug!("max_depth={} gives {} leaves", depth, tree.num_leaves());
        best = Some(tree);
    }

    best.ok_or_else(|| HarnessError::Fit {
        reason: format!("no depth-limited tree has at most {limit} leaves"),
    })
}
