use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use sketch_test_utils::write_temp_config;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("sketchbook").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_default_runs_all_sketches() {
    cmd()
        .assert()
        .success()
        .stdout(contains("richard\nsusan\n"))
        .stdout(contains("bad_data: { model: 'Model', field: 'Field' }"))
        .stdout(contains("bad_request: { model: 'Model', field: 'Field' }"))
        .stdout(contains("Book.title -> The Great Book"));
}

#[test]
fn test_delegate_only() {
    let assert = cmd().arg("delegate").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, "richard\nsusan\n");
}

#[test]
fn test_errors_json() {
    let assert = cmd().args(["errors", "--json"]).assert().success();
    let docs = json_lines(&assert.get_output().stdout);
    assert_eq!(docs.len(), 1);

    let errors = docs[0]["errors"].as_array().unwrap();
    assert_eq!(errors[0]["message"], "you bad data");
    assert_eq!(errors[0]["metadata"], serde_json::json!({ "model": "Model", "field": "Field" }));
    assert_eq!(errors[0]["payload"]["statusCode"], 422);
    assert_eq!(errors[1]["message"], "you bad request");
    assert_eq!(errors[1]["metadata"], serde_json::json!({ "model": "Model", "field": "Field" }));
    assert_eq!(errors[1]["payload"]["statusCode"], 400);
}

#[test]
fn test_schema_json() {
    let assert = cmd().args(["--json", "schema"]).assert().success();
    let docs = json_lines(&assert.get_output().stdout);

    assert_eq!(docs[0]["title"], "The Great Book");
    assert_eq!(docs[0]["extends"], "Book");
    assert_eq!(docs[0]["fields"][0]["name"], "bids");
    assert_eq!(docs[0]["fields"][0]["type"], "[Float]");
    assert_eq!(docs[0]["type_defs"], "extend type Book {\n  bids: [Float]\n}\n");
}

#[test]
fn test_config_overrides_inputs() {
    let config = write_temp_config(
        "[delegate]\nnames = [\"ada\", \"grace\", \"joan\"]\n\n[errors.metadata]\nmodel = \"Book\"\nfield = \"bids\"\n",
    );

    cmd()
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(contains("ada\ngrace\njoan\n"))
        .stdout(contains("bad_data: { model: 'Book', field: 'bids' }"));
}

#[test]
fn test_invalid_config_fails() {
    let config = write_temp_config("[delegate]\nnames = []\n");

    cmd()
        .args(["delegate", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(contains("delegate.names must not be empty"));
}

#[test]
fn test_missing_config_fails() {
    cmd()
        .args(["--config", "/nonexistent/sketchbook.toml"])
        .assert()
        .failure()
        .stderr(contains("failed to load config"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let assert = cmd()
        .args(["delegate", "--log-level", "debug"])
        .assert()
        .success();
    let output = assert.get_output();

    assert_eq!(String::from_utf8_lossy(&output.stdout), "richard\nsusan\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resolved property"));
}
