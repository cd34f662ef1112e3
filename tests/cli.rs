// ============================================================
// End-to-end tests against the compiled binary
// ============================================================
// Each test builds a throwaway job root:
//
//   {root}/input/data/training/*.csv
//   {root}/input/config/hyperparameters.json   (optional)
//   {root}/model/
//   {root}/output/

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn iris_train() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iris-train"));
    cmd.env("RUST_LOG", "iris_train=warn");
    cmd.env_remove("IRIS_TRAIN_ROOT");
    cmd
}

fn train(root: &Path, extra: &[&str]) -> Output {
    iris_train()
        .arg("train")
        .arg("--root")
        .arg(root)
        .args(extra)
        .output()
        .unwrap()
}

fn predict_stdin(root: &Path, input: &str) -> Output {
    let mut child = iris_train()
        .arg("predict")
        .arg("--root")
        .arg(root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading stdin (e.g. no model), so a broken pipe is fine
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn train_then_predict_round_trip() {
    let root = tempdir().unwrap();
    let data = root.path().join("input/data/training");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("train.csv"), "a,1,2\nb,3,4\n").unwrap();

    let out = train(root.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(root.path().join("model/decision-tree-model.mpk").is_file());
    assert!(!root.path().join("output/failure").exists());

    let out = predict_stdin(root.path(), "0,1,2\n0,3,4\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "a\nb\n");
}

#[test]
fn predict_from_input_file() {
    let root = tempdir().unwrap();
    let data = root.path().join("input/data/training");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("part-0.csv"), "low,1\nlow,2\n").unwrap();
    fs::write(data.join("part-1.csv"), "high,10\nhigh,11\n").unwrap();

    assert!(train(root.path(), &["-H", "max_leaf_nodes=2"]).status.success());

    let input = root.path().join("input.csv");
    fs::write(&input, "?,11\n?,1\n").unwrap();

    let out = iris_train()
        .arg("predict")
        .arg("--model-dir")
        .arg(root.path().join("model"))
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "high\nlow\n");
}

#[test]
fn missing_training_directory_exits_255() {
    let root = tempdir().unwrap();

    let out = train(root.path(), &[]);
    assert_eq!(out.status.code(), Some(255));

    let failure = fs::read_to_string(root.path().join("output/failure")).unwrap();
    assert!(failure.starts_with("Exception during training: "));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains(&failure), "stderr did not echo the failure record");
}

#[test]
fn invalid_hyperparameter_file_value_exits_255() {
    let root = tempdir().unwrap();
    let data = root.path().join("input/data/training");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("train.csv"), "a,1\nb,2\n").unwrap();

    let config = root.path().join("input/config");
    fs::create_dir_all(&config).unwrap();
    fs::write(config.join("hyperparameters.json"), r#"{"max_leaf_nodes": "not-a-number"}"#).unwrap();

    let out = train(root.path(), &[]);
    assert_eq!(out.status.code(), Some(255));

    let failure = fs::read_to_string(root.path().join("output/failure")).unwrap();
    assert!(failure.contains("max_leaf_nodes"));
}

#[test]
fn predict_without_model_fails() {
    let root = tempdir().unwrap();

    let out = predict_stdin(root.path(), "0,1\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No usable model"));
}
