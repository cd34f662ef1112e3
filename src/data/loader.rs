// ============================================================
// Layer 4 — Training Data Loader
// ============================================================
// Reads every file in the training channel directory and
// concatenates them into one labelled Dataset.
//
// The job launcher copies the training channel into a flat
// directory, typically one or more `*.csv` parts:
//
//   input/data/training/
//     iris-part-0.csv
//     iris-part-1.csv
//
// Rules:
//   - Every regular file counts, whatever its extension
//   - Subdirectories are ignored
//   - No files at all → NoTrainingData
//   - Files are visited in file-name order, rows in file order
//   - All files must share one feature width

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::parser::read_labelled;
use crate::domain::dataset::Dataset;
use crate::domain::error::HarnessError;
use crate::domain::traits::DatasetSource;

/// Loads and concatenates all CSV files from a directory.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvDirLoader {
    /// Directory holding the headerless CSV files
    dir: PathBuf,
}

impl CsvDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List the regular files in the directory, sorted by name.
    fn input_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read training directory '{}'", self.dir.display()))?
        {
            let entry = entry?;
            let path  = entry.path();

            if path.is_file() {
                files.push(path);
            } else {
                tracing::debug!("Skipping non-file entry '{}'", path.display());
            }
        }

        files.sort();
        Ok(files)
    }
}

impl DatasetSource for CsvDirLoader {
    fn load(&self) -> Result<Dataset> {
        let files = self.input_files()?;
        if files.is_empty() {
            return Err(HarnessError::NoTrainingData { dir: self.dir.clone() }.into());
        }

        let mut dataset = Dataset::new();

        for path in &files {
            let part = load_single_csv(path)?;
            tracing::debug!("Loaded: {} ({} rows)", path.display(), part.len());

            dataset.extend(part, &display_name(path))?;
        }

        tracing::info!(
            "Loaded {} rows with {} features from {} files",
            dataset.len(),
            dataset.feature_width().unwrap_or(0),
            files.len()
        );
        Ok(dataset)
    }
}

/// Parse one headerless CSV file.
fn load_single_csv(path: &Path) -> Result<Dataset> {
    let file = fs::File::open(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    Ok(read_labelled(file, &display_name(path))?)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
