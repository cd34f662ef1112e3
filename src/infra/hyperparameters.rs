// ============================================================
// Layer 6 — Hyperparameter Resolver
// ============================================================
// Reads the job's hyperparameter file and merges explicit
// overrides on top.
//
// The launcher writes every value as a JSON string:
//
//   { "max_leaf_nodes": "5", "criterion": "gini" }
//
// so each string value is JSON-decoded again to recover its
// real type. A string that is not valid JSON ("gini") stays a
// string and produces a DecodeWarning; that is never fatal.
//
// Precedence: overrides > file > nothing.

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::hyperparameters::{DecodeWarning, HyperValue, HyperparameterSet};

/// Resolved hyperparameters plus the values that could not be decoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub parameters: HyperparameterSet,
    pub warnings:   Vec<DecodeWarning>,
}

/// Resolves the HyperparameterSet for one training run.
pub struct HyperparameterResolver {
    config_file: PathBuf,
}

impl HyperparameterResolver {
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self { config_file: config_file.into() }
    }

    /// Load the config file (if it exists) and merge `overrides` last.
    pub fn resolve(&self, overrides: HyperparameterSet) -> Result<Resolution> {
        if !self.config_file.is_file() {
            tracing::info!(
                "No hyperparameter file at '{}', using {} explicit values",
                self.config_file.display(),
                overrides.len()
            );
            return Ok(Resolution { parameters: overrides, warnings: Vec::new() });
        }

        let json = fs::read_to_string(&self.config_file).with_context(|| {
            format!("Cannot read hyperparameters from '{}'", self.config_file.display())
        })?;
        let raw: serde_json::Value = serde_json::from_str(&json).with_context(|| {
            format!("'{}' is not valid JSON", self.config_file.display())
        })?;

        let serde_json::Value::Object(entries) = raw else {
            bail!(
                "'{}' must contain a JSON object of hyperparameters",
                self.config_file.display()
            );
        };

        let mut resolution = Resolution::default();
        for (key, value) in entries {
            let decoded = match value {
                serde_json::Value::String(s) => decode_string(&key, s, &mut resolution.warnings),
                other => HyperValue::from(other),
            };
            resolution.parameters.insert(key, decoded);
        }

        resolution.parameters.merge(overrides);

        for (key, value) in resolution.parameters.iter() {
            tracing::info!("Hyperparameter {} = {}", key, value);
        }
        Ok(resolution)
    }
}

/// Decode one stringified value outside a config file, e.g. a
/// command-line override. Same rule as file values: `"5"` becomes
/// `Integer(5)`, `"gini"` stays a string and yields a warning.
pub fn decode_value(key: &str, raw: &str) -> (HyperValue, Option<DecodeWarning>) {
    let mut warnings = Vec::new();
    let value = decode_string(key, raw.to_string(), &mut warnings);
    (value, warnings.pop())
}

/// JSON-decode a stringified value, keeping the raw string on failure.
fn decode_string(key: &str, raw: String, warnings: &mut Vec<DecodeWarning>) -> HyperValue {
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => HyperValue::from(value),
        Err(_) => {
            let warning = DecodeWarning { key: key.to_string(), raw };
            tracing::warn!("{}", warning);
            let value = HyperValue::String(warning.raw.clone());
            warnings.push(warning);
            value
        }
    }
}
