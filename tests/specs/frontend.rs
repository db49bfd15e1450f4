//! Black-box specs for the `lltop` batch front-end binary.

use std::fs;
use std::os::unix::fs::PermissionsExt;

use predicates::prelude::*;

use crate::prelude::bin;

/// Writes an executable stand-in for `ssh` that ignores its arguments
/// and prints one canned sampler line.
fn fake_ssh(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("fake-ssh");
    fs::write(&path, "#!/bin/sh\necho '10.0.0.1 1048576 0 5'\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn server_list_mode_attributes_and_prints_a_table() {
    let tmp = tempfile::tempdir().unwrap();
    let ssh = fake_ssh(tmp.path());

    bin("lltop")
        .arg("--server-list")
        .arg("--ssh")
        .arg(&ssh)
        .arg("--lltop-serv")
        .arg("lltop-serv")
        .arg("node01")
        .assert()
        .success()
        .stdout(predicate::str::contains("JOBID"))
        .stdout(predicate::str::contains("10.0.0.1"));
}

#[test]
fn no_header_suppresses_the_column_header() {
    let tmp = tempfile::tempdir().unwrap();
    let ssh = fake_ssh(tmp.path());

    bin("lltop")
        .arg("--server-list")
        .arg("--no-header")
        .arg("--ssh")
        .arg(&ssh)
        .arg("--lltop-serv")
        .arg("lltop-serv")
        .arg("node01")
        .assert()
        .success()
        .stdout(predicate::str::contains("JOBID").not());
}

#[test]
fn send_all_flag_is_forwarded_to_the_remote_sampler() {
    let tmp = tempfile::tempdir().unwrap();
    let record = tmp.path().join("recorded-args");
    let ssh = tmp.path().join("record-ssh");
    fs::write(
        &ssh,
        format!(
            "#!/bin/sh\necho \"$@\" > {}\necho '10.0.0.1 1048576 0 5'\n",
            record.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&ssh, fs::Permissions::from_mode(0o755)).unwrap();

    bin("lltop")
        .arg("--server-list")
        .arg("--send-all")
        .arg("--ssh")
        .arg(&ssh)
        .arg("--lltop-serv")
        .arg("lltop-serv")
        .arg("node01")
        .assert()
        .success();

    let recorded = fs::read_to_string(&record).unwrap();
    assert!(recorded.contains("--send-all"), "recorded args: {recorded}");
}

#[test]
fn unknown_filesystem_name_is_a_fatal_configuration_error() {
    bin("lltop")
        .arg("nonexistent-fs")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown filesystem"));
}
