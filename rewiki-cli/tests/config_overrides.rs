use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_file_changes_heading_marker() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.wiki");
    fs::write(&input_path, "** Title\n").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r##"[dialect]
target_heading_marker = "#"
"##,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());
    cmd.assert().success().stdout("## Title\n");
}

#[test]
fn rewiki_toml_in_working_directory_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("page.wiki"), "it'''s\n").unwrap();
    fs::write(
        dir.path().join("rewiki.toml"),
        "[pipeline]\ntriple_quote_reduction = true\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.current_dir(dir.path()).arg("page.wiki");
    cmd.assert().success().stdout("it's\n");
}

#[test]
fn extra_args_override_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.wiki");
    fs::write(&input_path, "** Title\nit'''s\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg(input_path.as_os_str())
        .arg("--extra-target-heading-marker")
        .arg("+")
        .arg("--extra-triple-quote");
    cmd.assert().success().stdout("++ Title\nit's\n");
}

#[test]
fn list_passes_reflects_config() {
    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg("--list-passes").arg("--extra-triple-quote");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("triple-quote"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.wiki");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg(input_path.as_os_str())
        .arg("--config")
        .arg(dir.path().join("absent.toml").as_os_str());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn unknown_extra_is_rejected() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.wiki");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg(input_path.as_os_str()).arg("--extra-theme").arg("dark");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option --extra-theme"));
}

#[test]
fn invalid_marker_is_rejected() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.wiki");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rewiki");
    cmd.arg(input_path.as_os_str())
        .arg("--extra-target-heading-marker")
        .arg("==");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Expected a single character"));
}
