use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;

// Nothing listens on port 1, so every request fails fast
const UNREACHABLE_HOST: &str = "127.0.0.1:1";

fn cmd() -> Command {
    Command::cargo_bin("pr-report").unwrap()
}

/// Command that sees no config file or token from the surrounding machine
fn isolated(dir: &Path) -> Command {
    let mut cmd = cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("RUST_LOG", "info")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN");
    cmd
}

#[test]
fn help_lists_both_selection_modes() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--start-num"))
        .stdout(contains("--list-of-pull-requests"));
}

#[test]
fn range_and_list_are_rejected_together() {
    cmd()
        .args(["-o", "octokit", "-r", "rest.js", "-s", "0", "-t", "1", "-l", "5,6"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("cannot be used with"));
}

#[test]
fn missing_selection_is_rejected() {
    cmd()
        .args(["--owner", "octokit", "--repo", "rest.js"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn zero_total_is_rejected() {
    cmd()
        .args(["-o", "octokit", "-r", "rest.js", "-s", "0", "-t", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn oversized_page_is_rejected() {
    cmd()
        .args(["-o", "octokit", "-r", "rest.js", "-s", "0", "-t", "1", "-p", "250"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn failed_requests_exit_with_one_and_still_write_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");

    isolated(dir.path())
        .args(["-o", "o", "-r", "r", "-l", "1", "--host", UNREACHABLE_HOST])
        .arg("-f")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("the report is incomplete"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "PR number,merged_by.login,created_at,merged_at,html_url\n"
    );
}

#[test]
fn unwritable_output_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.csv");

    isolated(dir.path())
        .args(["-o", "o", "-r", "r", "-l", "1", "--host", UNREACHABLE_HOST])
        .arg("-f")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to write report"));

    assert!(!out.exists());
}

#[test]
fn unaddressable_range_exits_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");

    isolated(dir.path())
        .args(["-o", "o", "-r", "r", "-s", "0", "-t", "18446744073709551615"])
        .args(["--host", UNREACHABLE_HOST])
        .arg("-f")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("beyond the pages the API can address"));

    assert!(!out.exists());
}

#[test]
fn missing_config_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    isolated(dir.path())
        .args(["-o", "o", "-r", "r", "-l", "1", "--host", UNREACHABLE_HOST])
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to read config file"));

    assert!(!dir.path().join("results.csv").exists());
}
