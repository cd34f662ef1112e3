// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `predict`, and
// their flags. Every path defaults under the job root, which
// comes from --root or the IRIS_TRAIN_ROOT environment variable.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::train_use_case::{TrainConfig, DEFAULT_JOB_ROOT};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit a decision tree on the training channel and save it
    Train(TrainArgs),

    /// Label headerless CSV rows with a saved model
    Predict(PredictArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Job root that the default directories hang off
    #[arg(long, env = "IRIS_TRAIN_ROOT", default_value = DEFAULT_JOB_ROOT)]
    pub root: PathBuf,

    /// Directory of headerless CSV files, label in column 0
    /// [default: {root}/input/data/training]
    #[arg(long)]
    pub train_data_dir: Option<PathBuf>,

    /// Where the model artifact is written [default: {root}/model]
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Where the failure file goes if training fails [default: {root}/output]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON object of hyperparameters
    /// [default: {root}/input/config/hyperparameters.json]
    #[arg(long)]
    pub hyperparameters_file: Option<PathBuf>,

    /// Hyperparameter override, e.g. -H max_leaf_nodes=5 (repeatable,
    /// wins over the hyperparameter file)
    #[arg(short = 'H', long = "hyperparameter", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub hyperparameters: Vec<(String, String)>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        let mut config = TrainConfig::from_args(&a.root, a.hyperparameters);

        if let Some(dir) = a.train_data_dir {
            config.train_data_dir = dir;
        }
        if let Some(dir) = a.model_dir {
            config.model_dir = dir;
        }
        if let Some(dir) = a.output_dir {
            config.output_dir = dir;
        }
        if let Some(file) = a.hyperparameters_file {
            config.hyperparameters_file = file;
        }
        config
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Job root that the default model directory hangs off
    #[arg(long, env = "IRIS_TRAIN_ROOT", default_value = DEFAULT_JOB_ROOT)]
    pub root: PathBuf,

    /// Directory holding the saved model [default: {root}/model]
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Headerless CSV to label; column 0 is dropped. Reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl PredictArgs {
    pub fn resolved_model_dir(&self) -> PathBuf {
        self.model_dir
            .clone()
            .unwrap_or_else(|| TrainConfig::with_root(&self.root).model_dir)
    }
}

/// Split `key=value`; the key must be non-empty.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::domain::hyperparameters::HyperValue;
    use clap::Parser;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("max_leaf_nodes=5"),
            Ok(("max_leaf_nodes".to_string(), "5".to_string()))
        );
        assert_eq!(parse_key_val("tags=a=b"), Ok(("tags".to_string(), "a=b".to_string())));
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=5").is_err());
    }

    #[test]
    fn test_train_args_into_config() {
        let cli = Cli::try_parse_from([
            "iris-train", "train",
            "--root", "/job",
            "--model-dir", "/elsewhere/model",
            "-H", "max_leaf_nodes=5",
        ])
        .unwrap();

        let Commands::Train(args) = cli.command else {
            panic!("expected train");
        };
        let cfg: TrainConfig = args.into();

        assert_eq!(cfg.train_data_dir, PathBuf::from("/job/input/data/training"));
        assert_eq!(cfg.model_dir, PathBuf::from("/elsewhere/model"));
        assert_eq!(cfg.overrides.get("max_leaf_nodes"), Some(&HyperValue::Integer(5)));
    }

    #[test]
    fn test_predict_default_model_dir() {
        let cli = Cli::try_parse_from(["iris-train", "predict", "--root", "/job"]).unwrap();
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.resolved_model_dir(), PathBuf::from("/job/model"));
        assert!(args.input.is_none());
    }
}
