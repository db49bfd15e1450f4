// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-variant bookkeeping model: jobs, clients, and per-server
//! frames. This is the data model only, with no terminal UI or event
//! loop attached; it is exercised here as a library so the job-mapper's
//! reassignment invariants are testable without a terminal.

use std::collections::HashMap;

use lltop_core::ClientCounterSnapshot;

/// Literal job name meaning "no active job; use the client's own name
/// as its job label."
pub const JOB_NONE: &str = "0";

#[derive(Debug, Clone, Default)]
pub struct Job {
    pub name: String,
    pub stats: ClientCounterSnapshot,
    pub clients: Vec<String>,
    pub frames: Vec<String>,
}

impl Job {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn is_garbage(&self) -> bool {
        self.clients.is_empty() && self.frames.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub name: String,
    pub job: Option<String>,
}

/// Owns the job/client binding state for the event variant.
#[derive(Debug, Default)]
pub struct JobTable {
    jobs: HashMap<String, Job>,
    clients: HashMap<String, Client>,
}

impl JobTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.get(name)
    }

    pub fn client(&self, name: &str) -> Option<&Client> {
        self.clients.get(name)
    }

    /// Binds `client` to `job` (or, if `job == JOB_NONE`, to a
    /// singleton job named after the client itself). No-op if already
    /// bound. Removes the client from its previous job first, garbage
    /// collecting that job if it is left with no clients and no
    /// frames.
    pub fn bind(&mut self, client_name: &str, job_name: &str) {
        let target = if job_name == JOB_NONE {
            client_name.to_string()
        } else {
            job_name.to_string()
        };

        let current_job = self.clients.get(client_name).and_then(|c| c.job.clone());
        if current_job.as_deref() == Some(target.as_str()) {
            return;
        }

        if let Some(old) = current_job {
            if let Some(old_job) = self.jobs.get_mut(&old) {
                old_job.clients.retain(|c| c != client_name);
                if old_job.is_garbage() {
                    self.jobs.remove(&old);
                }
            }
        }

        let job = self.jobs.entry(target.clone()).or_insert_with(|| Job::new(&target));
        job.clients.push(client_name.to_string());

        self.clients
            .entry(client_name.to_string())
            .and_modify(|c| c.job = Some(target.clone()))
            .or_insert(Client {
                name: client_name.to_string(),
                job: Some(target),
            });
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

/// One server's per-job frame state for the event variant: a rolling
/// two-slot snapshot keyed by job name, with the same "zero only the
/// incoming half when one generation behind" correction as the
/// generational sampler.
#[derive(Debug, Clone, Default)]
pub struct FrameEntry {
    pub stats: [ClientCounterSnapshot; 2],
    pub fe_gen: u64,
}

#[derive(Debug, Default)]
pub struct ServerFrame {
    entries: HashMap<String, FrameEntry>,
    pub gen: u64,
}

impl ServerFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to generation `gen` and adds `delta` into the job's
    /// incoming slot.
    pub fn accumulate(&mut self, job_name: &str, gen: u64, delta: ClientCounterSnapshot) {
        let entry = self
            .entries
            .entry(job_name.to_string())
            .or_insert_with(FrameEntry::default);
        let slot = gen % 2;
        if entry.fe_gen < gen.saturating_sub(1) {
            entry.stats = [ClientCounterSnapshot::default(); 2];
        } else if entry.fe_gen == gen.saturating_sub(1) && entry.fe_gen != gen {
            entry.stats[slot] = ClientCounterSnapshot::default();
        }
        entry.fe_gen = gen;
        entry.stats[slot] += delta;
        self.gen = gen;
    }

    pub fn entry(&self, job_name: &str) -> Option<&FrameEntry> {
        self.entries.get(job_name)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
