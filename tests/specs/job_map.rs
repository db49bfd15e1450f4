//! Black-box specs for the `lltop-job-map` binary.

use std::fs;

use predicates::prelude::*;

use crate::prelude::bin;

#[test]
fn prints_job_none_for_host_with_no_active_job() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("node01/active_jobs")).unwrap();

    bin("lltop-job-map")
        .arg("--execd-spool")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node01 0"));
}

#[test]
fn prints_active_job_name() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("node01/active_jobs/9001.1")).unwrap();

    bin("lltop-job-map")
        .arg("--execd-spool")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("node01 9001.1"));
}

#[test]
fn host_without_active_jobs_directory_is_omitted() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("node01")).unwrap();

    bin("lltop-job-map")
        .arg("--execd-spool")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
