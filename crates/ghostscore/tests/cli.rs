//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A paragraph comfortably over the 50-character detection minimum.
const SAMPLE: &str = "I tried the new espresso machine last weekend and honestly it \
surprised me. The first shot came out bitter, so I adjusted the grind. Much better. \
My notes from that morning run three pages long.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Detect Command
// =============================================================================

#[test]
fn detect_file_reports_risk() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    cmd()
        .args(["detect", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Composite:"))
        .stdout(predicate::str::contains("risk"));
}

#[test]
fn detect_json_has_all_signals() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    let output = cmd()
        .args(["detect", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("detect --json should output valid JSON");
    assert_eq!(json["signals"].as_array().unwrap().len(), 21);
    assert!(json["composite_score"].is_number());
    assert!(json["risk_level"].is_string());
}

#[test]
fn detect_reads_stdin() {
    cmd()
        .args(["detect", "--json"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"composite_score\""));
}

#[test]
fn detect_rejects_short_input() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "too short").unwrap();
    cmd()
        .args(["detect", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too short"));
}

#[test]
fn detect_min_chars_flag_overrides_default() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "short but allowed").unwrap();
    cmd()
        .args([
            "detect",
            tmp.path().to_str().unwrap(),
            "--min-chars",
            "5",
            "--json",
        ])
        .assert()
        .success();
}

#[test]
fn detect_all_signals_lists_every_name() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    cmd()
        .args(["detect", tmp.path().to_str().unwrap(), "--all-signals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexical Diversity Index"))
        .stdout(predicate::str::contains("Syntactic Burstiness"));
}

#[test]
fn detect_missing_file_fails() {
    cmd()
        .args(["detect", "/nonexistent/draft.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Quality Command
// =============================================================================

#[test]
fn quality_json_has_subscores() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    let output = cmd()
        .args(["quality", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("quality --json should output valid JSON");
    assert!(json["score"].is_number());
    assert!(json["readability"].is_object());
    assert!(json["structure"].is_object());
    assert!(json["completeness"].is_object());
}

#[test]
fn quality_content_type_sets_targets() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    let output = cmd()
        .args([
            "quality",
            tmp.path().to_str().unwrap(),
            "--content-type",
            "news-article",
            "--json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["completeness"]["target_min"], 500);
    assert_eq!(json["completeness"]["target_max"], 1200);
}

#[test]
fn quality_unknown_content_type_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    cmd()
        .args([
            "quality",
            tmp.path().to_str().unwrap(),
            "--content-type",
            "novel",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Semantic Command
// =============================================================================

#[test]
fn semantic_reports_missing_entities() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    let output = cmd()
        .args([
            "semantic",
            tmp.path().to_str().unwrap(),
            "--entities",
            "espresso machine,moka pot",
            "--lsi",
            "grind,crema",
            "--json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("semantic --json should output valid JSON");
    assert_eq!(json["entities_covered"][0], "espresso machine");
    assert_eq!(json["entities_missing"][0], "moka pot");
    assert_eq!(json["lsi_covered"][0], "grind");
    assert_eq!(json["lsi_missing"][0], "crema");
}

#[test]
fn semantic_no_targets_scores_full() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    cmd()
        .args(["semantic", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100"));
}

// =============================================================================
// Rewrite Command
// =============================================================================

#[test]
fn rewrite_generated_text_lists_problems() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        "Furthermore, it is worth noting that this comprehensive landscape \
         continues to evolve. Moreover, the seamless paradigm is a testament \
         to holistic synergy. Additionally, one can leverage these robust \
         insights to foster a pivotal transformation.",
    )
    .unwrap();
    cmd()
        .args(["rewrite", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(scored "));
}

#[test]
fn rewrite_json_includes_instructions() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SAMPLE).unwrap();
    let output = cmd()
        .args(["rewrite", tmp.path().to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("rewrite --json should output valid JSON");
    assert!(json["composite_score"].is_number());
    assert!(json["instructions"].is_string());
}

// =============================================================================
// Config Integration
// =============================================================================

#[test]
fn config_min_chars_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(".ghostscore.toml");
    std::fs::write(&config_path, "min_chars = 500\n").unwrap();

    let file_path = dir.path().join("draft.md");
    std::fs::write(&file_path, SAMPLE).unwrap();

    cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "detect",
            file_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too short"));
}

#[test]
fn config_content_type_applies_to_quality() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(".ghostscore.toml");
    std::fs::write(&config_path, "content_type = \"news-article\"\n").unwrap();

    let file_path = dir.path().join("draft.md");
    std::fs::write(&file_path, SAMPLE).unwrap();

    let output = cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--json",
            "quality",
            file_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["completeness"]["target_min"], 500);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
