// Acceptance tests for the study-planner CLI.
//
// Each test runs the binary inside a temp dir with HOME pointed at it, so no
// user or repository config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn planner(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("study-planner").expect("binary should exist");
    cmd.current_dir(dir.path()).env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    TempDir::new().expect("temp dir should be created")
}

#[test]
fn cli_version_flag() {
    let dir = workspace();
    planner(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("study-planner"));
}

#[test]
fn generate_requires_request_or_subjects() {
    let dir = workspace();
    planner(&dir)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn generate_rejects_request_with_inline_subjects() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--request", "plan.toml", "--subject", "Math:50:50:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn generate_rejects_malformed_subject_spec() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--subject", "Math:fifty:50:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marks must be a number"));
}

#[test]
fn generate_single_subject_gets_whole_budget() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--hours", "8", "--subject", "Math:50:50:5"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Schedule generated successfully!"))
        .stdout(predicate::str::contains("| Math    | 50            | 50             | 5          | 8.0               |"))
        .stdout(predicate::str::contains("Time Distribution"));
}

#[test]
fn generate_csv_uses_rounded_hours() {
    let dir = workspace();
    planner(&dir)
        .args([
            "generate",
            "--hours",
            "10",
            "--subject",
            "A:90:90:1",
            "--subject",
            "B:40:40:9",
            "--format",
            "csv",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with(
            "Subject,Current Marks,Attendance (%),Importance,Recommended Hours",
        ))
        .stdout(predicate::str::contains(",1,1.3"))
        .stdout(predicate::str::contains(",9,8.8"));
}

#[test]
fn generate_uses_configured_default_hours_and_format() {
    let dir = workspace();
    fs::write(
        dir.path().join("planner.toml"),
        r#"
[defaults]
total_hours = 6.0

[output]
format = "json"
"#,
    )
    .expect("config should write");

    planner(&dir)
        .args(["generate", "--subject", "Math:50:50:5", "--student", "Ada"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total_hours\": 6.0"))
        .stdout(predicate::str::contains("\"student\": \"Ada\""));
}

#[test]
fn generate_reads_request_file() {
    let dir = workspace();
    fs::write(
        dir.path().join("week.toml"),
        r#"
student = "Ada"
total_hours = 12.0

[[subjects]]
name = "Chemistry"
marks = 35.0
attendance = 60.0
importance = 8

[[subjects]]
name = "Art"
marks = 95.0
attendance = 98.0
importance = 2
"#,
    )
    .expect("request should write");

    planner(&dir)
        .args(["generate", "--request", "week.toml", "--format", "md", "--no-chart"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- Student: Ada"))
        .stdout(predicate::str::contains("| Chemistry | 35 | 60 | 8 |"))
        .stdout(predicate::str::contains("Time Distribution").not());
}

#[test]
fn generate_reports_every_validation_issue() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--hours", "30", "--subject", ":120:50:5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: invalid request"))
        .stderr(predicate::str::contains("total_hours: must be between 1 and 24"))
        .stderr(predicate::str::contains("subjects[0].name"))
        .stderr(predicate::str::contains("subjects[0].marks"));
}

#[test]
fn generate_missing_request_file_is_runtime_failure() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--request", "missing.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("request file not found"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = workspace();
    fs::write(
        dir.path().join("planner.toml"),
        "[defaults]\nnum_subjects = 0\n",
    )
    .expect("config should write");

    planner(&dir)
        .args(["generate", "--subject", "Math:50:50:5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("defaults.num_subjects"));
}

#[test]
fn check_accepts_valid_json_request() {
    let dir = workspace();
    fs::write(
        dir.path().join("plan.json"),
        r#"{"total_hours": 5, "subjects": [{"name": "Bio", "marks": 60, "attendance": 75, "importance": 6}]}"#,
    )
    .expect("request should write");

    planner(&dir)
        .args(["check", "plan.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("ok: 1 subject(s), 5 hours"));
}

#[test]
fn check_rejects_out_of_range_importance() {
    let dir = workspace();
    fs::write(
        dir.path().join("plan.toml"),
        r#"
total_hours = 5.0

[[subjects]]
name = "Bio"
marks = 60.0
attendance = 75.0
importance = 11
"#,
    )
    .expect("request should write");

    planner(&dir)
        .args(["check", "plan.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("subjects[0].importance"));
}

#[test]
fn check_reports_importance_beyond_byte_range_as_invalid_input() {
    let dir = workspace();
    fs::write(
        dir.path().join("plan.toml"),
        r#"
total_hours = 5.0

[[subjects]]
name = "Bio"
marks = 60.0
attendance = 75.0
importance = 300
"#,
    )
    .expect("request should write");

    planner(&dir)
        .args(["check", "plan.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "subjects[0].importance: must be between 1 and 10 (found 300)",
        ));
}

#[test]
fn generate_reports_negative_importance_as_invalid_input() {
    let dir = workspace();
    planner(&dir)
        .args(["generate", "--hours", "6", "--subject", "Art:70:80:-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("subjects[0].importance"));
}
