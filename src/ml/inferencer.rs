// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Loads the saved TreeClassifier and labels headerless CSV.
// Column 0 of the input is always dropped: inference input
// keeps the training layout with a placeholder label first.

use anyhow::Result;
use std::io::Read;

use crate::data::parser::read_unlabelled;
use crate::infra::checkpoint::ModelStore;
use crate::ml::model::TreeClassifier;

pub struct Inferencer {
    model: TreeClassifier,
}

impl Inferencer {
    pub fn new(model: TreeClassifier) -> Self {
        Self { model }
    }

    pub fn from_store(store: &ModelStore) -> Result<Self> {
        let model = store.load()?;
        Ok(Self::new(model))
    }

    /// Predicted label for each input row, in input order.
    pub fn predict_csv<R: Read>(&self, csv_data: R, source_name: &str) -> Result<Vec<String>> {
        predict(&self.model, csv_data, source_name)
    }
}

/// Parse `csv_data`, drop column 0, and predict every row with `model`.
pub fn predict<R: Read>(model: &TreeClassifier, csv_data: R, source_name: &str) -> Result<Vec<String>> {
    let rows   = read_unlabelled(csv_data, source_name)?;
    let labels = model.predict(&rows)?;
    tracing::debug!("Predicted {} rows from {}", labels.len(), source_name);
    Ok(labels)
}
