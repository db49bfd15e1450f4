// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn binding_creates_job_and_adds_client() {
    let mut table = JobTable::new();
    table.bind("c1", "job42");
    assert_eq!(table.client("c1").unwrap().job.as_deref(), Some("job42"));
    assert_eq!(table.job("job42").unwrap().clients, vec!["c1".to_string()]);
}

#[test]
fn rebinding_to_same_job_is_a_no_op() {
    let mut table = JobTable::new();
    table.bind("c1", "job42");
    table.bind("c1", "job42");
    assert_eq!(table.job("job42").unwrap().clients, vec!["c1".to_string()]);
}

#[test]
fn reassignment_removes_from_old_job_before_joining_new_one() {
    let mut table = JobTable::new();
    table.bind("c1", "jobA");
    table.bind("c1", "jobB");
    assert_eq!(table.job("jobB").unwrap().clients, vec!["c1".to_string()]);
    // jobA had only c1, and no frames reference it, so it is collected.
    assert!(table.job("jobA").is_none());
}

#[test]
fn old_job_survives_if_other_clients_remain() {
    let mut table = JobTable::new();
    table.bind("c1", "jobA");
    table.bind("c2", "jobA");
    table.bind("c1", "jobB");
    assert_eq!(table.job("jobA").unwrap().clients, vec!["c2".to_string()]);
}

#[test]
fn job_none_literal_makes_client_its_own_job() {
    let mut table = JobTable::new();
    table.bind("lonely-client", JOB_NONE);
    assert_eq!(
        table.client("lonely-client").unwrap().job.as_deref(),
        Some("lonely-client")
    );
    assert!(table.job("lonely-client").is_some());
}

#[test]
fn frame_zeroes_incoming_half_only_one_generation_behind() {
    let mut frame = ServerFrame::new();
    frame.accumulate("job1", 0, ClientCounterSnapshot::new(10, 0, 1));
    frame.accumulate("job1", 1, ClientCounterSnapshot::new(5, 0, 1));
    let entry = frame.entry("job1").unwrap();
    // gen 1 went into slot 1; slot 0 (gen 0's data) must be untouched.
    assert_eq!(entry.stats[1], ClientCounterSnapshot::new(5, 0, 1));
    assert_eq!(entry.stats[0], ClientCounterSnapshot::new(10, 0, 1));
}

#[test]
fn frame_zeroes_both_halves_when_more_than_one_generation_stale() {
    let mut frame = ServerFrame::new();
    frame.accumulate("job1", 0, ClientCounterSnapshot::new(10, 0, 1));
    frame.accumulate("job1", 5, ClientCounterSnapshot::new(3, 0, 1));
    let entry = frame.entry("job1").unwrap();
    assert_eq!(entry.stats[1], ClientCounterSnapshot::new(3, 0, 1));
    assert_eq!(entry.stats[0], ClientCounterSnapshot::default());
}
