//! CLI integration tests for the sqlformatter binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper: get a Command for the sqlformatter binary.
fn sqlformatter() -> Command {
    Command::cargo_bin("sqlformatter").expect("binary should exist")
}

/// Helper: create a temp directory holding the given files.
fn setup_temp_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}

/// Helper: a Command reading `input` on stdin from an empty directory, so
/// no config file is picked up.
fn with_stdin(dir: &TempDir, input: &str) -> Command {
    let mut cmd = sqlformatter();
    cmd.current_dir(dir.path()).write_stdin(input.to_string());
    cmd
}

// ─── stdin ───

#[test]
fn test_stdin_formatted_to_stdout() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "select a,b from t")
        .assert()
        .success()
        .stdout("select a, b\nfrom t\n");
}

#[test]
fn test_stdin_dash_argument() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "SELECT 1")
        .arg("-")
        .assert()
        .success()
        .stdout("SELECT 1\n");
}

#[test]
fn test_stdin_style_flags() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "select a, b from t")
        .args(["--keyword-case", "upper", "--indent-style", "tabularLeft"])
        .assert()
        .success()
        .stdout("SELECT    a, b\nFROM      t\n");
}

#[test]
fn test_stdin_language_flag() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "select [order id] from [t]")
        .args(["--language", "tsql"])
        .assert()
        .success()
        .stdout("select [order id]\nfrom [t]\n");
}

#[test]
fn test_stdin_params_flag() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "select ? from t")
        .args(["--params", "[\"42\"]"])
        .assert()
        .success()
        .stdout("select 42\nfrom t\n");
}

#[test]
fn test_stdin_check_mode() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "SELECT    1")
        .arg("--check")
        .assert()
        .code(1)
        .stdout("");
    with_stdin(&dir, "SELECT 1\n").arg("--check").assert().success();
}

#[test]
fn test_stdin_ast_json() {
    let dir = setup_temp_dir(&[]);
    let output = with_stdin(&dir, "SELECT a FROM t")
        .arg("--ast")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["statements"].as_array().unwrap().len(), 1);
    assert_eq!(json["tokens"][0]["text"], "SELECT");
}

#[test]
fn test_stdin_error_exit_code() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "SELECT (a FROM t")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unclosed `(`").and(predicate::str::contains("line 1, column 8")));
}

#[test]
fn test_unknown_language_fails() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "SELECT 1")
        .args(["--language", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported SQL dialect"));
}

#[test]
fn test_invalid_params_json_fails() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "SELECT ?")
        .args(["--params", "{not json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--params"));
}

// ─── Preformatted files (should be left unchanged) ───

#[test]
fn test_preformatted_file_unchanged() {
    let dir = setup_temp_dir(&[("query.sql", "select 1\n")]);
    sqlformatter()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("1 unchanged"));
}

#[test]
fn test_preformatted_check_mode_passes() {
    let dir = setup_temp_dir(&[("query.sql", "select 1\n")]);
    sqlformatter().arg("--check").arg(dir.path()).assert().success();
}

// ─── Unformatted files (should be reformatted) ───

#[test]
fn test_unformatted_file_reformatted() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlformatter()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("1 reformatted"));

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT 1\n");
}

#[test]
fn test_unformatted_check_mode_fails() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlformatter()
        .arg("--check")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("would be reformatted"));

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT    1\n");
}

#[test]
fn test_unformatted_diff_mode() {
    let dir = setup_temp_dir(&[("query.sql", "SELECT    1\n")]);
    sqlformatter()
        .args(["--diff", "--no-color"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("-SELECT    1").and(predicate::str::contains("+SELECT 1")));

    let content = fs::read_to_string(dir.path().join("query.sql")).unwrap();
    assert_eq!(content, "SELECT    1\n");
}

#[test]
fn test_verbose_lists_files() {
    let dir = setup_temp_dir(&[("a.sql", "select 1\n"), ("b.sql", "SELECT    2\n")]);
    sqlformatter()
        .arg("-v")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(
            predicate::str::contains("unchanged")
                .and(predicate::str::contains("reformatted"))
                .and(predicate::str::contains("2 file(s) processed")),
        );
}

#[test]
fn test_file_error_exit_code() {
    let dir = setup_temp_dir(&[("good.sql", "SELECT    1\n"), ("bad.sql", "SELECT 'oops\n")]);
    sqlformatter()
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unterminated-string"));

    // The good file is still formatted, the bad one is untouched.
    assert_eq!(fs::read_to_string(dir.path().join("good.sql")).unwrap(), "SELECT 1\n");
    assert_eq!(fs::read_to_string(dir.path().join("bad.sql")).unwrap(), "SELECT 'oops\n");
}

#[test]
fn test_single_process_matches_parallel() {
    let files: Vec<(String, &str)> = (0..8)
        .map(|i| (format!("q{i}.sql"), "select a,b from t\n"))
        .collect();
    let refs: Vec<(&str, &str)> = files.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    let parallel = setup_temp_dir(&refs);
    let serial = setup_temp_dir(&refs);
    sqlformatter().arg(parallel.path()).assert().success();
    sqlformatter()
        .arg("--single-process")
        .arg(serial.path())
        .assert()
        .success();
    for (name, _) in &refs {
        let a = fs::read_to_string(parallel.path().join(name)).unwrap();
        let b = fs::read_to_string(serial.path().join(name)).unwrap();
        assert_eq!(a, "select a, b\nfrom t\n");
        assert_eq!(a, b);
    }
}

// ─── File discovery ───

#[test]
fn test_non_sql_files_ignored() {
    let dir = setup_temp_dir(&[("notes.txt", "SELECT    1\n"), ("query.sql", "select 1\n")]);
    sqlformatter()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("1 file(s) processed"));
    assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "SELECT    1\n");
}

#[test]
fn test_exclude_pattern() {
    let dir = setup_temp_dir(&[("keep.sql", "SELECT    1\n"), ("vendor/skip.sql", "SELECT    2\n")]);
    sqlformatter()
        .args(["--exclude", "vendor"])
        .arg(dir.path())
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.path().join("keep.sql")).unwrap(), "SELECT 1\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("vendor/skip.sql")).unwrap(),
        "SELECT    2\n"
    );
}

// ─── Config files ───

#[test]
fn test_config_file_applies() {
    let dir = setup_temp_dir(&[
        (".sqlformatter.toml", "keyword_case = \"upper\"\nexclude = [\"skip.sql\"]\n"),
        ("query.sql", "select a from t\n"),
        ("skip.sql", "select    b\n"),
    ]);
    sqlformatter().arg(dir.path()).assert().success();
    assert_eq!(
        fs::read_to_string(dir.path().join("query.sql")).unwrap(),
        "SELECT a\nFROM t\n"
    );
    assert_eq!(fs::read_to_string(dir.path().join("skip.sql")).unwrap(), "select    b\n");
}

#[test]
fn test_flags_override_config_file() {
    let dir = setup_temp_dir(&[(".sqlformatter.toml", "keyword_case = \"upper\"\n")]);
    with_stdin(&dir, "select a from t")
        .args(["--keyword-case", "lower"])
        .assert()
        .success()
        .stdout("select a\nfrom t\n");
}

#[test]
fn test_explicit_config_path() {
    let dir = setup_temp_dir(&[("style.toml", "indent_style = \"tabularRight\"\n")]);
    with_stdin(&dir, "select a from t")
        .arg("--config")
        .arg(dir.path().join("style.toml"))
        .assert()
        .success()
        .stdout("   select a\n     from t\n");
}

#[test]
fn test_unknown_config_option_fails() {
    let dir = setup_temp_dir(&[(".sqlformatter.toml", "line_length = 88\n")]);
    with_stdin(&dir, "select 1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config option: line_length"));
}

#[test]
fn test_missing_config_path_fails() {
    let dir = setup_temp_dir(&[]);
    with_stdin(&dir, "select 1")
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}
