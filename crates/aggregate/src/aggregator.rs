// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache-chained attribution: address -> host -> job, each level
//! short-circuiting to accumulation. Degrades gracefully on resolver
//! failure (job > host > address).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::IndexMap;
use lltop_core::NameStats;
use lltop_resolve::{HostResolver, JobResolver};

use crate::table;

type Shared = Rc<RefCell<NameStats>>;

pub struct Aggregator {
    host_resolver: Box<dyn HostResolver>,
    job_resolver: Box<dyn JobResolver>,
    addr_cache: HashMap<String, Shared>,
    host_cache: HashMap<String, Shared>,
    name_stats: IndexMap<String, Shared>,
}

impl Aggregator {
    pub fn new(host_resolver: Box<dyn HostResolver>, job_resolver: Box<dyn JobResolver>) -> Self {
        Self {
            host_resolver,
            job_resolver,
            addr_cache: HashMap::new(),
            host_cache: HashMap::new(),
            name_stats: IndexMap::new(),
        }
    }

    fn name_stats_entry(&mut self, final_name: &str) -> Shared {
        self.name_stats
            .entry(final_name.to_string())
            .or_insert_with(|| Rc::new(RefCell::new(NameStats::new(final_name))))
            .clone()
    }

    /// Attributes and accumulates one `(addr, wr, rd, reqs)` record.
    pub fn account(&mut self, addr: &str, wr: u64, rd: u64, reqs: u64) {
        let stats = if let Some(existing) = self.addr_cache.get(addr) {
            existing.clone()
        } else {
            let stats = self.resolve_for_addr(addr);
            self.addr_cache.insert(addr.to_string(), stats.clone());
            stats
        };
        let mut stats = stats.borrow_mut();
        stats.accumulate(wr, rd, reqs);
    }

    fn resolve_for_addr(&mut self, addr: &str) -> Shared {
        let Some(host) = self.host_resolver.resolve(addr) else {
            return self.name_stats_entry(addr);
        };
        if let Some(existing) = self.host_cache.get(&host) {
            return existing.clone();
        }
        let stats = self.resolve_for_host(&host);
        self.host_cache.insert(host, stats.clone());
        stats
    }

    fn resolve_for_host(&mut self, host: &str) -> Shared {
        match self.job_resolver.resolve(host) {
            Some(job) => self.name_stats_entry(&job),
            None => self.name_stats_entry(host),
        }
    }

    /// Sorts accumulated rows descending by `(wr, rd, reqs)` and prints
    /// them. `header` controls whether the `JOBID WR_MB RD_MB REQS`
    /// header line is emitted first.
    pub fn finish(self, out: &mut impl std::io::Write, header: bool) {
        let mut rows: Vec<NameStats> = self
            .name_stats
            .into_values()
            .map(|shared| Rc::try_unwrap(shared).map(RefCell::into_inner).unwrap_or_else(|rc| rc.borrow().clone()))
            .collect();
        rows.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        if header {
            table::print_header(out);
        }
        for row in &rows {
            table::print_row(out, row);
        }
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
