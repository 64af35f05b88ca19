//! Tests for CLI argument parsing.

use clap::Parser;
use menucard::cli::Cli;
use menucard::config::Config;
use std::path::PathBuf;
use std::process::Command;

fn menucard_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_menucard"))
}

#[test]
fn test_help_lists_options() {
    let output = menucard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("Override the menu endpoint"));
}

#[test]
fn test_invalid_url_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = menucard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("--url")
        .arg("definitely not a url")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_flags_override_config() {
    let cli = Cli::try_parse_from([
        "menucard",
        "--url",
        "http://localhost:1234/menu",
        "--log-file",
        "/tmp/menu.log",
        "--log-level",
        "trace",
    ])
    .expect("valid args");

    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config.menu.url, "http://localhost:1234/menu");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/menu.log")));
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_no_flags_keep_config() {
    let cli = Cli::try_parse_from(["menucard"]).expect("valid args");
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_url_flag_replaces_invalid_file_url_before_validation() {
    let (_dir, path) = write_config("[menu]\nurl = \"ftp://old.example/menu\"\n");
    let cli = Cli::try_parse_from([
        "menucard",
        "--config",
        path.to_str().expect("utf-8 temp path"),
        "--url",
        "http://127.0.0.1:1/menu",
    ])
    .expect("valid args");

    let mut config = Config::load_from(&path).expect("file should parse");
    cli.apply(&mut config);
    assert!(config.validate().is_ok());
    assert_eq!(config.menu.url, "http://127.0.0.1:1/menu");
}

#[test]
fn test_invalid_file_url_without_override_exits_with_error() {
    let (_dir, path) = write_config("[menu]\nurl = \"ftp://old.example/menu\"\n");
    let output = menucard_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http or https"));
}
