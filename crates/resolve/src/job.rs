// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hostname -> job-id resolution.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Once;

/// Resolves a hostname to its currently active batch-scheduler job id.
/// Any failure degrades to "not found" (`None`).
pub trait JobResolver {
    fn resolve(&self, host: &str) -> Option<String>;
}

/// Scans `<spool_root>/<host>/active_jobs` for the first non-dot
/// directory entry; strips the trailing `.<array-task>` suffix. A
/// missing spool root is logged once, not once per host.
pub struct SpoolJobResolver {
    pub spool_root: PathBuf,
    warned: Once,
}

impl SpoolJobResolver {
    pub fn new(spool_root: impl Into<PathBuf>) -> Self {
        Self {
            spool_root: spool_root.into(),
            warned: Once::new(),
        }
    }
}

impl JobResolver for SpoolJobResolver {
    fn resolve(&self, host: &str) -> Option<String> {
        if !self.spool_root.is_dir() {
            self.warned.call_once(|| {
                tracing::warn!(spool_root = %self.spool_root.display(), "scheduler spool root does not exist");
            });
            return None;
        }
        let active_jobs = self.spool_root.join(host).join("active_jobs");
        let entries = std::fs::read_dir(&active_jobs).ok()?;
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if !entry.path().is_dir() {
                continue;
            }
            let job = name.split('.').next().unwrap_or(&name).to_string();
            return Some(job);
        }
        None
    }
}

/// Runs `helper <host>`, same contract as `ExternalHostResolver`.
pub struct ExternalJobResolver {
    pub command: String,
}

impl ExternalJobResolver {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl JobResolver for ExternalJobResolver {
    fn resolve(&self, host: &str) -> Option<String> {
        let output = match Command::new(&self.command).arg(host).output() {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(command = %self.command, error = %err, "job resolver helper failed to spawn");
                return None;
            }
        };
        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout.split_whitespace().next().map(str::to_string)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
