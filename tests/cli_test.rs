//! Integration tests for the qmc-pos binary

use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, ExitStatus};

fn run_qmc(args: &[&str]) -> (ExitStatus, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_qmc-pos"))
        .args(args)
        .output()
        .expect("Failed to execute qmc-pos");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (output.status, stdout, stderr)
}

#[test]
fn test_solve_expression_stage() {
    let (status, stdout, _) = run_qmc(&["solve", "0,4", "ABC", "--stage", "expression"]);
    assert!(status.success());
    assert_eq!(stdout, "POS Expression: (C') · (B')\n");
}

#[test]
fn test_solve_lowercase_variables() {
    let (status, stdout, _) = run_qmc(&["solve", "0, 3", "ab", "--stage", "pos"]);
    assert!(status.success());
    assert_eq!(stdout, "POS Expression: (A + B') · (A' + B)\n");
}

#[test]
fn test_solve_full_report() {
    let (status, stdout, _) = run_qmc(&["solve", "0,1,2,5,6,7", "ABC"]);
    assert!(status.success());
    assert!(stdout.starts_with("Variables: ABC\n"));
    assert!(stdout.contains("Original minterms: 0, 1, 2, 5, 6, 7\n"));
    assert!(stdout.contains("Using complement: 3, 4\n"));
    assert!(stdout.contains("== Step 3: Prime Implicant Table =="));
    assert!(stdout.contains("POS Expression: (A + B' + C') · (A' + B + C)"));
}

#[test]
fn test_solve_tautology() {
    let (status, stdout, _) = run_qmc(&["solve", "0,1,2,3", "AB", "--stage", "expression"]);
    assert!(status.success());
    assert_eq!(stdout, "Tautology: 1\n");
}

#[test]
fn test_solve_empty_minterms() {
    let (status, stdout, _) = run_qmc(&["solve", "", "AB", "--stage", "expression"]);
    assert!(status.success());
    assert_eq!(stdout, "POS Expression: (0)\n");
}

#[test]
fn test_solve_json() {
    let (status, stdout, _) = run_qmc(&["solve", "0,4", "ABC", "--json"]);
    assert!(status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["working_set"], serde_json::json!([1, 2, 3, 5, 6, 7]));
    assert_eq!(json["outcome"]["kind"], "expression");
    assert_eq!(json["outcome"]["expression"], "(C') · (B')");
    assert_eq!(json["prime_implicants"][0]["pattern"], "--1");
}

#[test]
fn test_solve_out_of_range_fails() {
    let (status, stdout, stderr) = run_qmc(&["solve", "0,8", "ABC"]);
    assert!(!status.success());
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains('8'));
}

#[test]
fn test_solve_bad_minterm_fails() {
    let (status, _, stderr) = run_qmc(&["solve", "1,x", "AB"]);
    assert!(!status.success());
    assert!(stderr.contains("Invalid minterm 'x'"), "stderr: {}", stderr);
}

#[test]
fn test_solve_missing_arguments() {
    let (status, _, stderr) = run_qmc(&["solve", "0,1"]);
    assert!(!status.success());
    assert!(stderr.contains("Usage: qmc-pos solve"));
}

#[test]
fn test_solve_with_config_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("qmc.yaml");
    let output_path = dir.path().join("out.txt");
    fs::write(
        &config_path,
        "render:\n  complement_mark: \"~\"\n  product_separator: \" * \"\n",
    )
    .unwrap();

    let (status, stdout, _) = run_qmc(&[
        "solve",
        "0,3",
        "AB",
        "--stage",
        "expression",
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);
    assert!(status.success());
    assert!(stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "POS Expression: (A + B~) * (A~ + B)\n"
    );
}

#[test]
fn test_config_check_rejects_bad_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("qmc.yaml");
    fs::write(&config_path, "limits:\n  max_variables: 40\n").unwrap();

    let (status, _, stderr) = run_qmc(&["config", "check", "--config", config_path.to_str().unwrap()]);
    assert!(!status.success());
    assert!(stderr.contains("max_variables"), "stderr: {}", stderr);
}

#[test]
fn test_config_show_defaults() {
    let (status, stdout, _) = run_qmc(&["config", "show"]);
    assert!(status.success());
    assert!(stdout.contains("max_variables: 6"));
    assert!(stdout.contains("empty_clause:"));
    assert!(stdout.contains("(0)"));
}

#[test]
fn test_schema_solution() {
    let (status, stdout, _) = run_qmc(&["schema", "solution"]);
    assert!(status.success());
    let schema: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(schema["title"], "Solution");
}

#[test]
fn test_version_and_unknown_command() {
    let (status, stdout, _) = run_qmc(&["version"]);
    assert!(status.success());
    assert!(stdout.starts_with("qmc-pos "));

    let (status, _, stderr) = run_qmc(&["frobnicate"]);
    assert!(!status.success());
    assert!(stderr.contains("Unknown command: frobnicate"));
}
