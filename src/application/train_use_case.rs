// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates one training run inside the job container:
//
//   Step 1: Resolve hyperparameters   (Layer 6 - infra)
//   Step 2: Load training data        (Layer 4 - data)
//   Step 3: Fit the decision tree     (Layer 5 - ml)
//   Step 4: Save the model artifact   (Layer 6 - infra)
//
// `execute` returns a Result from the first failing step.
// `run` is the only recovery boundary: any error becomes a
// FailureRecord written to the output directory and echoed to
// stderr, and the outcome tells the caller to exit with 255.
// Nothing is retried.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::data::loader::CsvDirLoader;
use crate::domain::{
    failure::FailureRecord,
    hyperparameters::HyperparameterSet,
    traits::DatasetSource,
};
use crate::infra::{
    checkpoint::ModelStore,
    failure_report::FailureReporter,
    hyperparameters::{decode_value, HyperparameterResolver},
};
use crate::ml::{model::TreeClassifier, trainer};

/// Job root used when the caller's environment does not name one
pub const DEFAULT_JOB_ROOT: &str = "/opt/ml";

/// Process exit status that marks the training job as failed
pub const FAILURE_EXIT_STATUS: u8 = 255;

// ─── Training Configuration ──────────────────────────────────────────────────
// Every path a run touches, plus explicit hyperparameter overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub train_data_dir:       PathBuf,
    pub model_dir:            PathBuf,
    pub output_dir:           PathBuf,
    pub hyperparameters_file: PathBuf,
    pub overrides:            HyperparameterSet,
}

impl TrainConfig {
    /// Conventional container layout under `root`:
    ///
    ///   {root}/input/data/training
    ///   {root}/input/config/hyperparameters.json
    ///   {root}/model
    ///   {root}/output
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            train_data_dir:       root.join("input/data/training"),
            model_dir:            root.join("model"),
            output_dir:           root.join("output"),
            hyperparameters_file: root.join("input/config/hyperparameters.json"),
            overrides:            HyperparameterSet::new(),
        }
    }

    /// Build from a mapping of named arguments.
    ///
    /// `train_data_dir`, `model_dir`, `output_dir` and
    /// `hyperparameters_file` replace the defaults under `root`.
    /// Every other key is a hyperparameter override, decoded the
    /// same way as values from the hyperparameter file.
    pub fn from_args<I>(root: impl AsRef<Path>, args: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::with_root(root);

        for (key, value) in args {
            match key.as_str() {
                "train_data_dir"       => config.train_data_dir = value.into(),
                "model_dir"            => config.model_dir = value.into(),
                "output_dir"           => config.output_dir = value.into(),
                "hyperparameters_file" => config.hyperparameters_file = value.into(),
                _ => {
                    let (decoded, _warning) = decode_value(&key, &value);
                    config.overrides.insert(key, decoded);
                }
            }
        }

        config
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::with_root(DEFAULT_JOB_ROOT)
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────────────
/// The two terminal states of a training run.
#[derive(Debug)]
pub enum TrainOutcome {
    Succeeded(TreeClassifier),
    Failed(FailureRecord),
}

impl TrainOutcome {
    /// 0 on success, FAILURE_EXIT_STATUS on failure
    pub fn exit_status(&self) -> u8 {
        match self {
            TrainOutcome::Succeeded(_) => 0,
            TrainOutcome::Failed(_)    => FAILURE_EXIT_STATUS,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Run the pipeline and convert any failure into the failure artifact.
    pub fn run(&self) -> TrainOutcome {
        match self.execute() {
            Ok(model) => TrainOutcome::Succeeded(model),
            Err(err)  => TrainOutcome::Failed(self.report_failure(&err)),
        }
    }

    /// Train from the configured training directory.
    pub fn execute(&self) -> Result<TreeClassifier> {
        let loader = CsvDirLoader::new(&self.config.train_data_dir);
        self.execute_with(&loader)
    }

    /// Train from any DatasetSource.
    pub fn execute_with(&self, source: &impl DatasetSource) -> Result<TreeClassifier> {
        let cfg = &self.config;

        // ── Step 1: Hyperparameters ───────────────────────────────────────────
        let resolution = HyperparameterResolver::new(&cfg.hyperparameters_file)
            .resolve(cfg.overrides.clone())?;
        if !resolution.warnings.is_empty() {
            tracing::info!(
                "{} hyperparameter values kept as raw strings",
                resolution.warnings.len()
            );
        }

        // ── Step 2: Training data ─────────────────────────────────────────────
        tracing::info!("Loading training data from '{}'", cfg.train_data_dir.display());
        let dataset = source.load()?;

        // ── Step 3: Fit ───────────────────────────────────────────────────────
        let model = trainer::fit(dataset.features(), dataset.labels(), &resolution.parameters)?;
        tracing::info!("Training accuracy: {:.4}", model.accuracy(&dataset)?);

        // ── Step 4: Persist ───────────────────────────────────────────────────
        ModelStore::new(&cfg.model_dir).save(&model)?;

        Ok(model)
    }

    /// Write the FailureRecord and echo it to stderr.
    fn report_failure(&self, err: &anyhow::Error) -> FailureRecord {
        let record = FailureRecord::from_error(err);

        if let Err(write_err) = FailureReporter::new(&self.config.output_dir).write(&record) {
            tracing::error!("Could not write failure report: {:#}", write_err);
        }
        eprintln!("{}", record.render());

        record
    }
}
