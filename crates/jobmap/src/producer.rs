// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One full scan of the scheduler execd spool, emitting `<host>
//! <job>\n` per host directory that has an `active_jobs` subdirectory.
//! Hosts with no `active_jobs` directory at all are skipped entirely
//! (not printed with `JOB_NONE`); hosts whose `active_jobs` directory
//! exists but is empty of job entries are printed with `JOB_NONE`.
//!
//! There is no internal sleep loop: a caller wanting a continuous feed
//! re-invokes `run` on its own cadence.

use std::fs;
use std::io::Write;
use std::path::Path;

const JOB_NONE: &str = "0";

pub fn run(spool_root: &Path, out: &mut impl Write) {
    let entries = match fs::read_dir(spool_root) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(spool_root = %spool_root.display(), error = %err, "cannot open execd spool root");
            return;
        }
    };

    for entry in entries.flatten() {
        let host = entry.file_name().to_string_lossy().into_owned();
        if host.starts_with('.') {
            continue;
        }
        let active_jobs = entry.path().join("active_jobs");
        let job_entries = match fs::read_dir(&active_jobs) {
            Ok(entries) => entries,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %active_jobs.display(), error = %err, "cannot read active_jobs directory");
                }
                continue;
            }
        };

        let mut job_name = JOB_NONE.to_string();
        for job_entry in job_entries.flatten() {
            let name = job_entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            job_name = name;
            break;
        }

        if let Err(err) = writeln!(out, "{host} {job_name}") {
            tracing::warn!(error = %err, "failed to write job-map line");
        }
    }
    let _ = out.flush();
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
