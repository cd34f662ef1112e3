// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Loads the model artifact once, then labels CSV input read
// from a file or any reader (stdin for the CLI).

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::infra::checkpoint::ModelStore;
use crate::ml::inferencer::Inferencer;

pub struct PredictUseCase {
    model_dir:  PathBuf,
    inferencer: Inferencer,
}

impl PredictUseCase {
    /// Load the model from `{model_dir}/decision-tree-model.mpk`.
    pub fn new(model_dir: impl Into<PathBuf>) -> Result<Self> {
        let model_dir  = model_dir.into();
        let inferencer = Inferencer::from_store(&ModelStore::new(&model_dir))?;
        Ok(Self { model_dir, inferencer })
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    pub fn predict_file(&self, path: &Path) -> Result<Vec<String>> {
        let file = fs::File::open(path)
            .with_context(|| format!("Cannot open input '{}'", path.display()))?;
        self.inferencer
            .predict_csv(BufReader::new(file), &path.display().to_string())
    }

    pub fn predict_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<Vec<String>> {
        self.inferencer.predict_csv(reader, source_name)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::HarnessError;
    use crate::domain::hyperparameters::HyperparameterSet;
    use crate::ml::trainer::fit;
    use tempfile::tempdir;

    #[test]
    fn test_predict_file() {
        let dir   = tempdir().unwrap();
        let model = fit(
            &[vec![1.0, 2.0], vec![3.0, 4.0]],
            &["a".to_string(), "b".to_string()],
            &HyperparameterSet::new(),
        )
        .unwrap();
        ModelStore::new(dir.path()).save(&model).unwrap();

        let input = dir.path().join("input.csv");
        fs::write(&input, "0,3,4\n0,1,2\n").unwrap();

        let use_case = PredictUseCase::new(dir.path()).unwrap();
        assert_eq!(use_case.model_dir(), dir.path());
        assert_eq!(
            use_case.predict_file(&input).unwrap(),
            vec!["b".to_string(), "a".to_string()]
        );
        assert_eq!(
            use_case.predict_reader("0,1,2\n".as_bytes(), "stdin").unwrap(),
            vec!["a".to_string()]
        );
    }

    #[test]
    fn test_missing_model() {
        let dir = tempdir().unwrap();
        let err = PredictUseCase::new(dir.path()).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<HarnessError>(),
            Some(HarnessError::ModelNotFound { .. })
        ));
    }
}
