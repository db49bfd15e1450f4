//! Black-box specs for the `lltop-serv` one-shot sampler binary.

use std::fs;

use predicates::prelude::*;

use crate::prelude::bin;

fn write_client_stats(exports_dir: &std::path::Path, client: &str, wr: i64, rd: i64) {
    let dir = exports_dir.join(client);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("stats"),
        format!("snapshot_time 0\nwrite_bytes 1 samples [bytes] 0 0 {wr}\nread_bytes 1 samples [bytes] 0 0 {rd}\n"),
    )
    .unwrap();
}

#[test]
fn unchanged_counters_over_the_interval_print_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("obdfilter");
    let exports = root.join("ost1/exports");
    write_client_stats(&exports, "10.0.0.1@tcp", 1024, 0);

    bin("lltop-serv")
        .arg("--interval")
        .arg("0")
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_root_is_a_fatal_configuration_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("does-not-exist");

    bin("lltop-serv")
        .arg("--interval")
        .arg("0")
        .arg("--root")
        .arg(&missing)
        .assert()
        .failure()
        .code(1);
}
