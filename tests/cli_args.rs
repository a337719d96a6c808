//! Integration tests for CLI argument handling
//!
//! Only paths that exit before the terminal is taken over are exercised here.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_travelguide"))
        .args(args)
        .output()
        .expect("Failed to execute travelguide")
}

/// Writes an empty config so the user's own config file is never read
fn empty_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").expect("Failed to write config");
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("travelguide"), "Help should mention travelguide");
    assert!(stdout.contains("--page"), "Help should mention --page flag");
    assert!(stdout.contains("--theme"), "Help should mention --theme flag");
    assert!(stdout.contains("--layout"), "Help should mention --layout flag");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_page_prints_error_and_exits() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);
    let output = run_cli(&["--config", &config, "--page", "Nightlife"]);
    assert!(!output.status.success(), "Expected unknown page to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown page") && stderr.contains("Nightlife"),
        "Should print error message about the unknown page: {}",
        stderr
    );
}

#[test]
fn test_invalid_theme_is_rejected_by_parser() {
    let output = run_cli(&["--theme", "neon"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("neon"), "Should name the bad value: {}", stderr);
}

#[test]
fn test_missing_config_file_prints_error_and_exits() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir.path().join("absent.json"));
    let output = run_cli(&["--config", &missing]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.json"), "{}", stderr);
}

#[test]
fn test_malformed_config_file_prints_error_and_exits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let output = run_cli(&["--config", &path_str(&path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config file"), "{}", stderr);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use travelguide::cli::Cli;
    use travelguide::config::{parse_page_arg, Config};
    use travelguide::pages::PageId;
    use travelguide::theme::{SidebarLayout, Theme};

    #[test]
    fn test_cli_no_args_parses() {
        let cli = Cli::parse_from(["travelguide"]);
        assert!(cli.page.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_load_rejects_unreadable_config_path() {
        let cli = Cli::parse_from(["travelguide", "--config", "/dev/null/none.json"]);
        assert!(Config::load(&cli).is_err());
    }

    #[test]
    fn test_parse_page_arg_accepts_every_title() {
        for id in PageId::ALL {
            assert_eq!(parse_page_arg(id.title()).unwrap(), id);
        }
    }

    #[test]
    fn test_parse_page_arg_invalid_returns_error() {
        assert!(parse_page_arg("invalid").is_err());
    }

    #[test]
    fn test_variant_flags_parse() {
        let cli = Cli::parse_from(["travelguide", "--theme", "light", "--layout", "grid"]);
        assert_eq!(cli.theme, Some(Theme::Light));
        assert_eq!(cli.layout, Some(SidebarLayout::Grid));
    }
}
