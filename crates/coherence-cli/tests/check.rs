//! End-to-end CLI tests: each one lays a drop manifest into a temp dir, runs
//! the binary, and checks exit code, stderr, and the written report.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn coherence_cmd() -> Command {
    Command::cargo_bin("coherence").expect("coherence binary not found")
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

const MISMATCHED_DROP: &str = r#"{
  "schema": "coherence.drop.v1",
  "packages": [
    { "id": "A", "version": "1.0",
      "dependency_groups": [
        { "target_framework": "net45",
          "dependencies": [ { "id": "B", "range": "1.0" } ] }
      ] },
    { "id": "B", "version": "2.0" }
  ]
}"#;

const COHERENT_DROP: &str = r#"{
  "schema": "coherence.drop.v1",
  "packages": [
    { "id": "A", "version": "1.0",
      "dependency_groups": [
        { "target_framework": "net45",
          "dependencies": [ { "id": "B", "range": "2.0" } ] }
      ] },
    { "id": "B", "version": "2.0" }
  ]
}"#;

#[test]
fn help_works() {
    coherence_cmd().arg("--help").assert().success();
}

#[test]
fn coherent_drop_passes() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), COHERENT_DROP);

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .success();

    let report = std::fs::read_to_string(tmp.path().join("report.json")).expect("report written");
    let json: serde_json::Value = serde_json::from_str(&report).expect("valid json");
    assert_eq!(json["schema"], "coherence.report.v1");
    assert_eq!(json["verdict"], "pass");
    assert_eq!(json["data"]["packages_scanned"], 2);
}

#[test]
fn mismatch_fails_with_exact_message() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), MISMATCHED_DROP);

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error: A depends on B v1.0 (net45) when the latest build is v2.0.",
        ));

    let report = std::fs::read_to_string(tmp.path().join("report.json")).expect("report written");
    let json: serde_json::Value = serde_json::from_str(&report).expect("valid json");
    assert_eq!(json["verdict"], "fail");
    assert_eq!(json["data"]["mismatches_errored"], 1);
}

#[test]
fn profile_none_disables_verification() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), MISMATCHED_DROP);

    coherence_cmd()
        .current_dir(tmp.path())
        .args([
            "--profile",
            "none",
            "check",
            "--manifest",
            "drop.json",
            "--report-out",
            "report.json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Coherence verification is disabled."));
}

#[test]
fn partner_mismatch_is_tolerated_by_default() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("drop.json"),
        r#"{
  "packages": [
    { "id": "A", "version": "1.0",
      "dependency_groups": [
        { "target_framework": "net45",
          "dependencies": [ { "id": "Ext", "range": "1.0" } ] }
      ] },
    { "id": "Ext", "version": "2.0", "partner": true }
  ]
}"#,
    );

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Following packages have mismatches but are not failures due to disabled verifications:",
        ))
        .stderr(predicate::str::contains(
            "warning: A depends on Ext v1.0 (net45) when the latest build is v2.0.",
        ));
}

#[test]
fn skip_flag_exempts_a_package() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), MISMATCHED_DROP);

    coherence_cmd()
        .current_dir(tmp.path())
        .args([
            "--skip",
            "A",
            "check",
            "--manifest",
            "drop.json",
            "--report-out",
            "report.json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Skipping verification for package A 1.0 because it is in ignore list.",
        ));
}

#[test]
fn config_file_is_honored() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), MISMATCHED_DROP);
    write_file(
        &tmp.path().join("coherence.toml"),
        "schema = \"coherence.config.v1\"\nprofile = \"none\"\n",
    );

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .success();
}

#[test]
fn duplicate_package_ids_are_fatal() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(
        &tmp.path().join("drop.json"),
        r#"{
  "packages": [
    { "id": "A", "version": "1.0" },
    { "id": "a", "version": "2.0" }
  ]
}"#,
    );

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("multiple copies of the same package"));
}

#[test]
fn md_renders_an_existing_report() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(&tmp.path().join("drop.json"), MISMATCHED_DROP);

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "drop.json", "--report-out", "report.json"])
        .assert()
        .code(1);

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["md", "--report", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Coherence report"))
        .stdout(predicate::str::contains("Verdict: **FAIL**"))
        .stdout(predicate::str::contains(
            "A depends on B v1.0 (net45) when the latest build is v2.0.",
        ));
}

#[test]
fn missing_manifest_is_a_runtime_error() {
    let tmp = TempDir::new().expect("temp dir");

    coherence_cmd()
        .current_dir(tmp.path())
        .args(["check", "--manifest", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("coherence error:"));
}
