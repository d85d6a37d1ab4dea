//! Tests driving the real `git-remote-exec` binary the way Git would.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn helper(remotes_root: &std::path::Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("git-remote-exec")?;
    cmd.env("GIT_DIR", ".git")
        .env_remove("GIT_REMOTE_HELPER_ROOT")
        .arg("--remotes-root")
        .arg(remotes_root)
        .arg("origin")
        .arg("exec://team/repo.git");
    Ok(cmd)
}

#[test]
fn capabilities_advertises_option_and_connect() -> Result<()> {
    let root = tempfile::tempdir()?;
    helper(root.path())?
        .write_stdin("capabilities\n\n")
        .assert()
        .success()
        .stdout("option\nconnect\n\n");
    Ok(())
}

#[test]
fn options_are_reported_unsupported() -> Result<()> {
    let root = tempfile::tempdir()?;
    helper(root.path())?
        .write_stdin("option progress true\n")
        .assert()
        .success()
        .stdout("unsupported\n");
    Ok(())
}

#[test]
fn connect_runs_the_named_service_against_the_resolved_path() -> Result<()> {
    let root = tempfile::tempdir()?;
    // `echo` stands in for a git service binary: the helper passes it the
    // resolved remote path, which must live under the remotes root.
    helper(root.path())?
        .write_stdin("connect echo\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("team/repo.git"))
        .stdout(predicate::str::contains(root.path().to_string_lossy().as_ref()));
    Ok(())
}

#[test]
fn empty_input_produces_no_protocol_output() -> Result<()> {
    let root = tempfile::tempdir()?;
    helper(root.path())?.write_stdin("").assert().success().stdout("");
    Ok(())
}

#[test]
fn missing_git_dir_is_a_startup_failure() -> Result<()> {
    let root = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("git-remote-exec")?;
    cmd.env_remove("GIT_DIR")
        .arg("--remotes-root")
        .arg(root.path())
        .arg("origin")
        .arg("exec://repo");
    cmd.write_stdin("capabilities\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MissingGitDir"));
    Ok(())
}

#[test]
fn missing_connect_service_fails_non_zero() -> Result<()> {
    let root = tempfile::tempdir()?;
    helper(root.path())?
        .write_stdin("connect this-service-does-not-exist\n\n")
        .assert()
        .failure();
    Ok(())
}
