//! Runs the built binary against the shipped fixture

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::{Command, Output};

const FIXTURE: &str = "tests/fixtures/users.json";

/// A config path that does not exist, so no local config leaks in
fn config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("roster-cli-{name}-{}.cfg", std::process::id()))
}

fn roster(config: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("roster binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn lists_the_bundled_roster() {
    let output = roster(&config_path("list"), &["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let ids: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["1", "U123", "U456", "U789"]);
}

#[test]
fn shows_a_user_by_alias() {
    let output = roster(&config_path("show"), &["--fixture", FIXTURE, "show", "#mocha"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("1 (numeric id)"));
    assert!(text.contains("tz:       Europe/Athens"));
}

#[test]
fn shows_a_user_as_json() {
    let output = roster(&config_path("json"), &["s", "U456", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["U456"]["name"], "user-2");
    assert_eq!(json["U456"]["slack"]["tz"], "Europe/Amsterdam");
    assert_eq!(json["U456"]["slack"]["tz_offset"], 3600);
}

#[test]
fn verbose_json_stays_parseable() {
    let output = roster(&config_path("verbose"), &["-v", "show", "U456", "--json"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("=== DEBUG ==="));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["U456"]["name"], "user-2");
}

#[test]
fn unknown_user_fails() {
    let output = roster(&config_path("unknown"), &["show", "U000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No user with id, name or alias matching U000"));
}

#[test]
fn filters_by_room_and_zone() {
    let room = roster(&config_path("room"), &["room", "C123"]);
    assert_eq!(stdout(&room).lines().count(), 2);

    let zone = roster(&config_path("zone"), &["zone", "Europe/Amsterdam"]);
    let text = stdout(&zone);
    assert!(text.contains("U456"));
    assert!(text.contains("U789"));
    assert!(!text.contains("U123"));
}

#[test]
fn check_passes_in_winter() {
    let output = roster(&config_path("winter"), &["check", "--date", "2025-01-15"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 4 users at 2025-01-15: 0 errors, 0 warnings"
    );
}

#[test]
fn check_passes_on_an_empty_roster() {
    let output = roster(
        &config_path("empty"),
        &["--fixture", "tests/fixtures/empty.json", "check", "--date", "2025-01-15"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 0 users at 2025-01-15: 0 errors, 0 warnings"
    );
}

#[test]
fn check_fails_in_summer() {
    let output = roster(&config_path("summer"), &["k", "-d", "2025-07-15"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("4 errors, 4 warnings"));
}

#[test]
fn config_init_and_reset() {
    let path = config_path("init");

    let init = roster(&path, &["config", "init"]);
    assert!(init.status.success());
    assert!(path.exists());

    let again = roster(&path, &["config", "init"]);
    assert_eq!(again.status.code(), Some(1));

    let reset = roster(&path, &["config", "reset"]);
    assert!(reset.status.success());
    assert!(!path.exists());
}
