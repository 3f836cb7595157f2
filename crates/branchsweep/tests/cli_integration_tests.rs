//! CLI integration tests for branchsweep

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{Duration, Local};

/// Get the path to the branchsweep binary
fn branchsweep_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_branchsweep"))
}

fn git(dir: &Path, args: &[&str], author: Option<(&str, &str)>) {
    let mut cmd = Command::new("git");
    cmd.args(args)
        .current_dir(dir)
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com");
    if let Some((name, date)) = author {
        cmd.env("GIT_AUTHOR_NAME", name).env("GIT_AUTHOR_DATE", date);
    }
    let output = cmd.output().expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn days_ago(days: i64) -> String {
    (Local::now() - Duration::days(days))
        .format("%Y-%m-%dT12:00:00")
        .to_string()
}

/// Layout: <temp>/upstream, <temp>/work (clone), <temp>/run (invocation dir)
///
/// Upstream has `feature/necs-1-a` by Alice two months old and `feature/b`
/// by Bob one week old.
fn setup_test_repos() -> tempfile::TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let upstream = temp.path().join("upstream");
    std::fs::create_dir(&upstream).unwrap();
    std::fs::create_dir(temp.path().join("run")).unwrap();

    git(&upstream, &["init", "-q", "-b", "main"], None);
    git(&upstream, &["commit", "-q", "--allow-empty", "-m", "Initial commit"], None);

    for (branch, author, age) in [("feature/necs-1-a", "Alice", 65), ("feature/b", "Bob", 7)] {
        let date = days_ago(age);
        git(&upstream, &["checkout", "-q", "-b", branch, "main"], None);
        git(
            &upstream,
            &["commit", "-q", "--allow-empty", "-m", branch],
            Some((author, date.as_str())),
        );
        git(&upstream, &["checkout", "-q", "main"], None);
    }

    git(temp.path(), &["clone", "-q", "upstream", "work"], None);
    temp
}

fn run_branchsweep(temp: &tempfile::TempDir, extra: &[&str]) -> Output {
    Command::new(branchsweep_binary())
        .arg("../work")
        .args(extra)
        .current_dir(temp.path().join("run"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run branchsweep")
}

#[test]
fn test_end_to_end_text_output() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &[]);
    assert!(
        output.status.success(),
        "branchsweep failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("Switched to working directory: "));
    assert!(lines[0].ends_with("work"));
    assert_eq!(lines[1], "Loading feature branch list...");
    assert_eq!(lines[2], "Total number of branches: 1");
    assert!(lines[3].starts_with("HTML written to "));
    assert_eq!(lines[4], "git push origin --delete origin/feature/necs-1-a");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_report_written_to_invocation_dir() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &[]);
    assert!(output.status.success());

    let report = temp.path().join("run").join("branches.html");
    assert!(report.is_file(), "report should be in the invocation directory");
    assert!(!temp.path().join("work").join("branches.html").exists());

    let html = std::fs::read_to_string(report).unwrap();
    assert!(html.contains("<td>origin/feature/necs-1-a</td>"));
    assert!(html.contains(r#"<a href="https://jira.unicorn.com/browse/NECS-1">NECS-1</a>"#));
    assert!(html.contains("<td>Alice</td>"));
    let date = (Local::now() - Duration::days(65)).format("%Y-%m-%d").to_string();
    assert!(html.contains(&format!("<td>{}</td>", date)));
    assert!(!html.contains("origin/feature/b<"));
    assert!(!html.contains("Bob"));
}

#[test]
fn test_quiet_prints_only_commands() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &["--quiet"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "git push origin --delete origin/feature/necs-1-a\n"
    );
}

#[test]
fn test_no_report_skips_file() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &["--no-report"]);
    assert!(output.status.success());
    assert!(!temp.path().join("run").join("branches.html").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("HTML written"));
    assert!(stdout.contains("git push origin --delete origin/feature/necs-1-a"));
}

#[test]
fn test_custom_output_path() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &["--output", "stale.html"]);
    assert!(output.status.success());
    assert!(temp.path().join("run").join("stale.html").is_file());
}

#[test]
fn test_json_output() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &["--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["command"], "sweep");
    assert_eq!(json["data"]["scanned"], 2);

    let branches = json["data"]["branches"].as_array().unwrap();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["name"], "origin/feature/necs-1-a");
    assert_eq!(branches[0]["author"], "Alice");
    assert_eq!(branches[0]["issue_key"], "NECS-1");
    assert_eq!(
        json["data"]["delete_commands"][0],
        "git push origin --delete origin/feature/necs-1-a"
    );
}

#[test]
fn test_max_age_flag() {
    let temp = setup_test_repos();
    let output = run_branchsweep(&temp, &["--quiet", "--max-age-months", "12"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file_in_workdir() {
    let temp = setup_test_repos();
    std::fs::write(
        temp.path().join("work").join(".branchsweep.toml"),
        "[report]\nissue_tracker_url = \"https://issues.example.com/browse\"\n",
    )
    .unwrap();

    let output = run_branchsweep(&temp, &["--quiet"]);
    assert!(output.status.success());
    let html = std::fs::read_to_string(temp.path().join("run").join("branches.html")).unwrap();
    assert!(html.contains("https://issues.example.com/browse/NECS-1"));
}

#[test]
fn test_not_a_repository() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("run")).unwrap();
    std::fs::create_dir(temp.path().join("work")).unwrap();

    let output = Command::new(branchsweep_binary())
        .arg("../work")
        .current_dir(temp.path().join("run"))
        .output()
        .expect("failed to run branchsweep");

    assert_eq!(output.status.code(), Some(9));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a git repository"), "stderr: {}", stderr);
    assert!(!temp.path().join("run").join("branches.html").exists());
}

#[test]
fn test_not_a_repository_json() {
    let temp = tempfile::tempdir().unwrap();
    let output = Command::new(branchsweep_binary())
        .arg(temp.path().join("missing"))
        .arg("--json")
        .current_dir(temp.path())
        .output()
        .expect("failed to run branchsweep");

    assert_eq!(output.status.code(), Some(9));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["issues"][0]["code"], "E002");
}

#[test]
fn test_missing_workdir_argument() {
    let output = Command::new(branchsweep_binary())
        .output()
        .expect("failed to run branchsweep");
    assert!(!output.status.success());
}
