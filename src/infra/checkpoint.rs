// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the fitted TreeClassifier.
//
// The model directory holds exactly one artifact with a fixed
// name; the job launcher packs the whole directory up after
// training, and inference later reads the same file back:
//
//   model/
//     decision-tree-model.mpk   ← MessagePack, named fields
//
// Saving overwrites whatever artifact is already there.
// Loading fails with ModelNotFound when the file is missing
// or cannot be decoded.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::HarnessError;
use crate::ml::model::TreeClassifier;

/// Fixed file name of the artifact inside the model directory
pub const MODEL_FILE_NAME: &str = "decision-tree-model.mpk";

/// Reads and writes the model artifact in one directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the artifact file
    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE_NAME)
    }

    /// Serialise `model` to `{dir}/decision-tree-model.mpk`.
    pub fn save(&self, model: &TreeClassifier) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))?;

        let path = self.model_path();
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write_named(&mut writer, model)
            .with_context(|| format!("Failed to serialise model to '{}'", path.display()))?;
        writer.flush()?;

        tracing::info!("Saved model to '{}'", path.display());
        Ok(path)
    }

    /// Deserialise the artifact written by `save`.
    pub fn load(&self) -> Result<TreeClassifier, HarnessError> {
        let path = self.model_path();

        let file = fs::File::open(&path).map_err(|e| not_found(&path, e))?;
        let model: TreeClassifier = rmp_serde::from_read(BufReader::new(file))
            .map_err(|e| not_found(&path, e))?;

        tracing::info!(
            "Loaded model from '{}' ({} classes, {} features)",
            path.display(),
            model.classes().len(),
            model.n_features()
        );
        Ok(model)
    }
}

fn not_found(path: &Path, reason: impl std::fmt::Display) -> HarnessError {
    HarnessError::ModelNotFound {
        path:   path.to_path_buf(),
        reason: reason.to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hyperparameters::HyperparameterSet;
    use crate::ml::trainer::fit;
    use tempfile::tempdir;

    fn iris_like() -> (Vec<Vec<f64>>, Vec<String>) {
        let rows = [
            ("setosa",     [5.1, 3.5, 1.4, 0.2]),
            ("setosa",     [4.9, 3.0, 1.4, 0.2]),
            ("setosa",     [4.7, 3.2, 1.3, 0.2]),
            ("versicolor", [7.0, 3.2, 4.7, 1.4]),
            ("versicolor", [6.4, 3.2, 4.5, 1.5]),
            ("versicolor", [6.9, 3.1, 4.9, 1.5]),
            ("virginica",  [6.3, 3.3, 6.0, 2.5]),
            ("virginica",  [5.8, 2.7, 5.1, 1.9]),
            ("virginica",  [7.1, 3.0, 5.9, 2.1]),
        ];
        rows.iter()
            .map(|(label, f)| (f.to_vec(), label.to_string()))
            .unzip()
    }

    #[test]
    fn test_round_trip_predictions_match() {
        let dir = tempdir().unwrap();
        let (features, labels) = iris_like();
        let model = fit(&features, &labels, &HyperparameterSet::new()).unwrap();
        let before = model.predict(&features).unwrap();

        let store = ModelStore::new(dir.path());
        let path  = store.save(&model).unwrap();
        assert_eq!(path, dir.path().join(MODEL_FILE_NAME));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.classes(), model.classes());
        assert_eq!(loaded.predict(&features).unwrap(), before);
    }

    #[test]
    fn test_save_creates_directory_and_overwrites() {
        let dir   = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nested/model"));

        let first = fit(&[vec![0.0], vec![1.0]], &["x".to_string(), "y".to_string()], &HyperparameterSet::new()).unwrap();
        store.save(&first).unwrap();

        let second = fit(&[vec![0.0], vec![1.0]], &["p".to_string(), "q".to_string()], &HyperparameterSet::new()).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().classes(), &["p".to_string(), "q".to_string()]);
    }

    #[test]
    fn test_missing_artifact_is_model_not_found() {
        let dir = tempdir().unwrap();
        let err = ModelStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, HarnessError::ModelNotFound { .. }));
    }

    #[test]
    fn test_corrupt_artifact_is_model_not_found() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MODEL_FILE_NAME), b"definitely not msgpack").unwrap();

        let err = ModelStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, HarnessError::ModelNotFound { .. }));
    }
}
