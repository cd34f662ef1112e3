// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to a use case.
//
//   1. `train`   — one training job; exit status 255 on failure
//   2. `predict` — labels CSV rows with a saved model
//
// Predictions are the only thing written to stdout.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs, TrainArgs};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use crate::application::predict_use_case::PredictUseCase;
use crate::application::train_use_case::{TrainOutcome, TrainUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "iris-train",
    version,
    about = "Train a decision-tree classifier on headerless CSV, then predict with it."
)]
pub struct Cli {
    /// The subcommand to run (train or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected use case and return the process exit status.
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Train(args)   => Ok(run_train(args)),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

/// Training never returns an Err: failures are already reported
/// by the use case and only change the exit status.
fn run_train(args: TrainArgs) -> ExitCode {
    let use_case = TrainUseCase::new(args.into());
    tracing::info!(
        "Starting training on data in '{}'",
        use_case.config().train_data_dir.display()
    );

    let outcome = use_case.run();
    match &outcome {
        TrainOutcome::Succeeded(model) => tracing::info!(
            "Training complete: {} classes, {} leaves",
            model.classes().len(),
            model.num_leaves()
        ),
        TrainOutcome::Failed(_) => tracing::info!("Training failed"),
    }

    ExitCode::from(outcome.exit_status())
}

fn run_predict(args: PredictArgs) -> Result<ExitCode> {
    let use_case = PredictUseCase::new(args.resolved_model_dir())?;
    tracing::debug!("Using model in '{}'", use_case.model_dir().display());

    let labels = match &args.input {
        Some(path) => use_case.predict_file(path)?,
        None       => use_case.predict_reader(io::stdin().lock(), "stdin")?,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for label in &labels {
        writeln!(out, "{label}")?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
