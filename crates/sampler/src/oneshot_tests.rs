// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use lltop_core::FakeClock;

use super::*;

fn write_client_stats(exports_dir: &Path, client: &str, wr: i64, rd: i64, reqs_samples: i64) {
    let dir = exports_dir.join(client);
    fs::create_dir_all(&dir).unwrap();
    let contents = format!(
        "snapshot_time 0\nwrite_bytes 1 samples [bytes] 0 0 {wr}\nread_bytes 1 samples [bytes] 0 0 {rd}\nreconnect {reqs_samples} samples [reqs] 0 0 0\n"
    );
    fs::write(dir.join("stats"), contents).unwrap();
}

fn emit(acc: &BTreeMap<String, ClientCounterSnapshot>, out: &mut impl Write) {
    for (name, delta) in acc {
        if delta.is_eviction_artifact() || delta.is_idle() {
            continue;
        }
        let _ = writeln!(out, "{} {} {} {}", name, delta.wr, delta.rd, delta.reqs);
    }
}

#[test]
fn emits_delta_across_the_interval_and_skips_idle_clients() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("obdfilter");
    let exports = root.join("ost1/exports");
    write_client_stats(&exports, "10.0.0.1@tcp", 100, 0, 5);
    write_client_stats(&exports, "10.0.0.2@tcp", 0, 0, 0);
    let walker = TargetWalker::new(&[root]).unwrap();

    let mut acc: BTreeMap<String, ClientCounterSnapshot> = BTreeMap::new();
    walk_into(&walker, &mut acc, Pass::Subtract);
    write_client_stats(&exports, "10.0.0.1@tcp", 300, 0, 9);
    walk_into(&walker, &mut acc, Pass::Add);

    let mut out = Vec::new();
    emit(&acc, &mut out);
    assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.1@tcp 200 0 4\n");
}

#[test]
fn eviction_artifact_is_skipped() {
    let mut acc: BTreeMap<String, ClientCounterSnapshot> = BTreeMap::new();
    acc.insert("c1".to_string(), ClientCounterSnapshot::new(-5, 0, 0));
    acc.insert("c2".to_string(), ClientCounterSnapshot::new(10, 10, 1));
    let mut out = Vec::new();
    emit(&acc, &mut out);
    assert_eq!(String::from_utf8(out).unwrap(), "c2 10 10 1\n");
}

#[test]
fn run_sleeps_the_full_interval_on_the_clock() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("mds");
    fs::create_dir_all(&root).unwrap();
    let walker = TargetWalker::new(&[root]).unwrap();
    let clock = FakeClock::new();
    let start = clock.now();
    let mut out = Vec::new();
    run(&walker, Duration::from_secs(10), &clock, &mut out, false);
    assert_eq!(clock.now(), start + Duration::from_secs(10));
}

#[test]
fn send_all_includes_idle_clients() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("obdfilter");
    let exports = root.join("ost1/exports");
    write_client_stats(&exports, "10.0.0.1@tcp", 0, 0, 0);
    let walker = TargetWalker::new(&[root]).unwrap();
    let clock = FakeClock::new();
    let mut out = Vec::new();
    run(&walker, Duration::from_secs(0), &clock, &mut out, true);
    assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.1@tcp 0 0 0\n");
}
