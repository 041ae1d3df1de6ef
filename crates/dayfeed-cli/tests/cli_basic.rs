//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only commands
//! that never reach the network are exercised here.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "dayfeed-cli", "--"])
        .args(args)
        .env("DAYFEED_ENV", "dev")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_help_lists_subcommands() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("day"));
    assert!(stdout.contains("feed"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_config_path() {
    let (code, stdout, _) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains("dayfeed-dev"));
}

#[test]
fn test_config_list() {
    let (code, stdout, _) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config list is JSON");
    for section in ["api", "feed", "clock", "location", "logging"] {
        assert!(parsed.get(section).is_some(), "missing section {section}");
    }
}

#[test]
fn test_config_get() {
    let (code, stdout, _) = run_cli(&["config", "get", "feed.page_size"]);
    assert_eq!(code, 0, "config get failed");
    let size: usize = stdout.trim().parse().expect("page size is a number");
    assert!(size >= 1);
}

#[test]
fn test_config_get_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "get", "feed.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key: feed.nope"));
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let (code, _, stderr) = run_cli(&["config", "set", "feed.page_size", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("feed.page_size"));
}

#[test]
fn test_feed_read_empty_url() {
    let (code, stdout, stderr) = run_cli(&["feed", "read", "  "]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error: Please enter a URL."));
}

#[test]
fn test_day_search_empty_query() {
    let (code, _, stderr) = run_cli(&["day", "search", ""]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Please enter a location."));
}

#[test]
fn test_day_url() {
    let (code, stdout, _) = run_cli(&["day", "url", "New York"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "?q=New%20York");
}

#[test]
fn test_day_locate_requires_both_coordinates() {
    let (code, _, _) = run_cli(&["day", "locate", "--lat", "52.5"]);
    assert_ne!(code, 0);
}

#[test]
fn test_day_watch_rejects_zero_ticks() {
    let (code, stdout, stderr) = run_cli(&["day", "watch", "Berlin", "--ticks", "0"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--ticks"));
}
