//! Basic CLI E2E tests.
//!
//! Each test runs the `questlog` binary against its own temporary data
//! directory and checks exit codes and output.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_questlog"))
        .args(args)
        .env("QUESTLOG_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    stdout
}

fn parse_json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("Failed to parse JSON output")
}

fn created_id(stdout: &str) -> String {
    stdout
        .trim()
        .strip_prefix("Quest created: ")
        .expect("missing quest id")
        .to_string()
}

#[test]
fn test_status_json_on_first_run() {
    let dir = TempDir::new().unwrap();
    let status = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(status["username"], "Hunter");
    assert_eq!(status["level"], 1);
    assert_eq!(status["rank"], "E");
    assert_eq!(status["streak"], 1);
    assert!(dir.path().join("questlog.db").exists());
}

#[test]
fn test_quest_add_and_list() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["quest", "add", "Write report", "-d", "hard"]);
    let id = created_id(&stdout);

    let quests = parse_json(&run_cli_success(dir.path(), &["quest", "list", "--json"]));
    let quests = quests.as_array().unwrap();
    assert_eq!(quests.len(), 1);
    assert_eq!(quests[0]["id"].to_string(), id);
    assert_eq!(quests[0]["title"], "Write report");
    assert_eq!(quests[0]["difficulty"], "hard");
    assert_eq!(quests[0]["xpReward"], 50);
    assert_eq!(quests[0]["completed"], false);
}

#[test]
fn test_quest_complete_awards_xp() {
    let dir = TempDir::new().unwrap();
    let id = created_id(&run_cli_success(
        dir.path(),
        &["quest", "add", "Stretch", "--difficulty", "medium"],
    ));

    let (stdout, stderr, code) = run_cli(dir.path(), &["quest", "complete", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Quest completed"));
    assert!(stderr.contains("QUEST COMPLETED"));

    let status = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(status["xp"], 25);
    assert_eq!(status["completedCount"], 1);
    assert!(status["achievements"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a == "first_quest"));

    // A second completion is a harmless no-op.
    run_cli_success(dir.path(), &["quest", "complete", &id]);
    let status = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(status["xp"], 25);
}

#[test]
fn test_quest_delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let id = created_id(&run_cli_success(dir.path(), &["quest", "add", "Dishes"]));

    // stdin is not a terminal, so without --yes the prompt declines.
    let (_, stderr, code) = run_cli(dir.path(), &["quest", "delete", &id]);
    assert_eq!(code, 0);
    assert!(stderr.contains("--yes"));
    let quests = parse_json(&run_cli_success(dir.path(), &["quest", "list", "--json"]));
    assert_eq!(quests.as_array().unwrap().len(), 1);

    let stdout = run_cli_success(dir.path(), &["quest", "delete", &id, "--yes"]);
    assert!(stdout.contains("Quest deleted"));
    let quests = parse_json(&run_cli_success(dir.path(), &["quest", "list", "--json"]));
    assert!(quests.as_array().unwrap().is_empty());
}

#[test]
fn test_invalid_difficulty_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["quest", "add", "Slay", "-d", "legendary"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("legendary"));
}

#[test]
fn test_blank_title_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["quest", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("must not be empty"));
}

#[test]
fn test_profile_rename() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["profile", "rename", "Jinwoo"]);
    let status = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(status["username"], "Jinwoo");
}

#[test]
fn test_reset_with_yes_wipes_progress() {
    let dir = TempDir::new().unwrap();
    let id = created_id(&run_cli_success(dir.path(), &["quest", "add", "Read"]));
    run_cli_success(dir.path(), &["quest", "complete", &id]);

    run_cli_success(dir.path(), &["reset", "--yes"]);
    let status = parse_json(&run_cli_success(dir.path(), &["status", "--json"]));
    assert_eq!(status["xp"], 0);
    assert_eq!(status["completedCount"], 0);
    assert!(status["tasks"].as_array().unwrap().is_empty());
    assert_eq!(status["streak"], 1);
}

#[test]
fn test_achievements_json_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let board = parse_json(&run_cli_success(dir.path(), &["achievements", "--json"]));
    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 13);
    assert_eq!(board[0]["id"], "first_quest");
    assert_eq!(board[0]["unlocked"], false);
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "timer.work_minutes"]).trim(),
        "25"
    );
    run_cli_success(dir.path(), &["config", "set", "timer.work_minutes", "50"]);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "timer.work_minutes"]).trim(),
        "50"
    );

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.break_minutes", "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
}

#[test]
fn test_timer_run_accepts_stdin_controls() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_questlog"))
        .args(["timer", "run"])
        .env("QUESTLOG_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn timer");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"s\nq\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let snapshot = stdout
        .lines()
        .find(|line| line.contains("TimerSnapshot"))
        .expect("missing status line");
    let snapshot = parse_json(snapshot);
    assert_eq!(snapshot["mode"], "work");
    assert_eq!(snapshot["total_secs"], 1500);
}
