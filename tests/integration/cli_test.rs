//! Integration tests for the glyphline CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::run_glyphline;

fn glyphline(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("glyphline").unwrap();
    cmd.env("GLYPHLINE_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// print
// ============================================================================

#[test]
fn print_fullwidth() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_glyphline(&dir, &["print", "-s", "full-width", "Hi!"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @"Ｈｉ！");
}

#[test]
fn print_defaults_to_monospace() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["print", "A1"])
        .assert()
        .success()
        .stdout("\u{1D670}\u{1D7F7}\n");
}

#[test]
fn print_joins_words_and_keeps_punctuation() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["print", "--style", "serif-italic", "oh,", "hi"])
        .assert()
        .success()
        .stdout("\u{1D45C}\u{1D489}, \u{1D489}\u{1D456}\n");
}

#[test]
fn print_plain_with_offsets() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["print", "--plain", "--up", "1", "--right", "4", "-n", "raw"])
        .assert()
        .success()
        .stdout("\x1b[1A\x1b[4Craw");
}

#[test]
fn print_uses_configured_style() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[style]\ndefault = \"serif-bold\"\n",
    )
    .unwrap();

    glyphline(&dir)
        .args(["print", "Z9"])
        .assert()
        .success()
        .stdout("\u{1D419}\u{1D7D7}\n");
}

#[test]
fn print_rejects_unknown_style() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_glyphline(&dir, &["print", "-s", "comic", "x"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value 'comic'"));
}

#[test]
fn print_requires_text() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .arg("print")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<TEXT>"));
}

// ============================================================================
// header
// ============================================================================

#[test]
fn header_centers_by_default() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["header", "-w", "5", "7", "42"])
        .assert()
        .success()
        .stdout("  7    42  \n");
}

#[test]
fn header_formats_decimals_with_precision() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["header", "-a", "right", "-w", "7", "-p", "3", "--separator", "|", "-1.5", "x"])
        .assert()
        .success()
        .stdout(" -1.500|      x\n");
}

#[test]
fn header_hidden_by_config_prints_nothing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[header]\nshow = false\n").unwrap();

    glyphline(&dir)
        .args(["header", "1", "2"])
        .assert()
        .success()
        .stdout("");
}

// ============================================================================
// styles / map
// ============================================================================

#[test]
fn styles_lists_every_style() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_glyphline(&dir, &["styles", "--sample", "a"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], format!("{:<24}a", "serif"));
    assert_eq!(lines[8], format!("{:<24}\u{1D68A}", "monospace"));
    assert_eq!(lines[11], format!("{:<24}ａ", "full-width"));
}

#[test]
fn map_shows_planck_exception() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_glyphline(&dir, &["map", "h", "-s", "serif-italic"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @"h -> 𝒉 U+1D489");
}

#[test]
fn map_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) =
        run_glyphline(&dir, &["map", "A.", "-s", "sans-serif-bold", "--json"]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["code_point"], "U+1D5D4");
    assert_eq!(json[1]["changed"], false);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    glyphline(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    glyphline(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default = \"monospace\""))
        .stdout(predicate::str::contains("alignment = \"center\""));
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[style\n").unwrap();

    glyphline(&dir)
        .args(["print", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    glyphline(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphline"));
}
