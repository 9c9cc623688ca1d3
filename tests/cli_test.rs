mod common;

use common::{docx_bytes, write_fixture};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resume-skill-matcher"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be one JSON document")
}

#[test]
fn test_missing_arguments() {
    for args in [&[][..], &["resume.pdf"][..]] {
        let output = run_cli(args);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            r#"{"error": "Missing arguments"}"#
        );
    }
}

#[test]
fn test_unsupported_file_type_exact_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "resume.txt", b"python sql");

    let output = run_cli(&[path.to_str().unwrap(), "Python,SQL"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"error": "Unsupported file type"}"#
    );
}

#[test]
fn test_unsupported_file_type_regardless_of_other_arguments() {
    let cases: [&[&str]; 3] = [
        &["", "Python"],
        &["resume.txt", "Python", "extra"],
        &["resume.txt", "-C"],
    ];

    for args in cases {
        let output = run_cli(args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            r#"{"error": "Unsupported file type"}"#,
            "args: {:?}",
            args
        );
    }
}

#[test]
fn test_successful_match_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        "resume.docx",
        &docx_bytes(&["experienced python developer with sql and aws"]),
    );

    let output = run_cli(&[path.to_str().unwrap(), "Python,SQL,Kubernetes"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"matched_skills": ["Python", "SQL"], "missing_skills": ["Kubernetes"], "matchPercentage": 66.67}"#
    );
}

#[test]
fn test_missing_local_file_is_reported_as_error() {
    let output = run_cli(&["/definitely/not/here/resume.docx", "Rust"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().starts_with("IO error"));
}

#[test]
fn test_pretty_output_and_threshold_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "resume.docx", &docx_bytes(&["Deployed on Kubernetas"]));

    let output = run_cli(&[
        path.to_str().unwrap(),
        "Kubernetes",
        "--threshold",
        "99",
        "--pretty",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains('\n'));
    let json = stdout_json(&output);
    assert_eq!(json["missing_skills"], serde_json::json!(["Kubernetes"]));
    assert_eq!(json["matchPercentage"], 0.0);
}

#[test]
fn test_invalid_threshold_is_json_error() {
    let output = run_cli(&["resume.pdf", "Rust", "--threshold", "150"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("threshold"));
}

#[test]
fn test_logs_never_reach_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "resume.docx", &docx_bytes(&["rust"]));

    let output = run_cli(&[path.to_str().unwrap(), "Rust", "--verbose", "--monitor"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["matched_skills"], serde_json::json!(["Rust"]));
}
