// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot, two-pass delta sampler: subtract a first snapshot, sleep
//! an absolute interval, add a second snapshot. The result is each
//! client's delta across the interval, summed over every target it
//! appears under.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use lltop_core::{Clock, ClientCounterSnapshot};
use lltop_counters::{read_client_stats, TargetWalker};

pub fn run(
    walker: &TargetWalker,
    interval: Duration,
    clock: &dyn Clock,
    out: &mut impl Write,
    send_all: bool,
) {
    let start = clock.now();
    let mut acc: BTreeMap<String, ClientCounterSnapshot> = BTreeMap::new();

    walk_into(walker, &mut acc, Pass::Subtract);
    clock.sleep_until(start + interval);
    walk_into(walker, &mut acc, Pass::Add);

    for (name, delta) in &acc {
        if !send_all {
            if delta.is_eviction_artifact() {
                tracing::debug!(client = %name, "skipping eviction artifact (negative delta)");
                continue;
            }
            if delta.is_idle() {
                continue;
            }
        }
        let _ = writeln!(out, "{} {} {} {}", name, delta.wr, delta.rd, delta.reqs);
    }
}

enum Pass {
    Subtract,
    Add,
}

fn walk_into(walker: &TargetWalker, acc: &mut BTreeMap<String, ClientCounterSnapshot>, pass: Pass) {
    for target in walker.targets() {
        for (client, path) in TargetWalker::clients(&target) {
            let snapshot = read_client_stats(&path);
            let entry = acc.entry(client).or_default();
            match pass {
                Pass::Subtract => *entry = entry.checked_sub(&snapshot),
                Pass::Add => *entry += snapshot,
            }
        }
    }
}

#[cfg(test)]
#[path = "oneshot_tests.rs"]
mod tests;
