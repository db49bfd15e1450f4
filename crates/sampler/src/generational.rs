// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Long-lived generational delta sampler: a rolling two-slot snapshot
//! per client, keyed by tick/generation number, with deltas pushed out
//! through a [`MsgBuf`].
//!
//! Per-generation update rule: a slot more than one generation stale
//! has both halves zeroed; a slot exactly one generation behind has
//! only its incoming half zeroed, never the half that still holds the
//! previous generation's accumulated total.

use std::collections::HashMap;

use lltop_core::ClientCounterSnapshot;
use lltop_counters::TargetWalker;

use crate::msgbuf::{DatagramSink, MsgBuf, MsgBufError};

#[derive(Debug, Clone, Default)]
pub struct PerClientSlot {
    pub stats: [ClientCounterSnapshot; 2],
    pub gen: u64,
}

pub struct GenerationalSampler {
    slots: HashMap<String, PerClientSlot>,
    send_all: bool,
}

impl GenerationalSampler {
    pub fn new(send_all: bool) -> Self {
        Self {
            slots: HashMap::new(),
            send_all,
        }
    }

    /// Runs one tick: walks every target, folds counters into
    /// generation `gen`'s slot, expires stale slots, and (for `gen >=
    /// 1`) emits surviving deltas through `msg_buf`. Returns the
    /// number of records sent.
    pub fn tick<S: DatagramSink>(
        &mut self,
        walker: &TargetWalker,
        gen: u64,
        msg_buf: &mut MsgBuf<S>,
    ) -> Result<usize, MsgBufError> {
        for target in walker.targets() {
            for (client, path) in TargetWalker::clients(&target) {
                let snapshot = lltop_counters::read_client_stats(&path);
                self.fold(&client, gen, snapshot);
            }
        }

        self.slots.retain(|_, slot| slot.gen >= gen.saturating_sub(1));

        if gen == 0 {
            return Ok(0);
        }

        let mut sent = 0;
        for (name, slot) in &self.slots {
            if slot.gen != gen {
                continue;
            }
            let current = slot.stats[(gen % 2) as usize];
            let previous = slot.stats[((gen + 1) % 2) as usize];
            let delta = current.checked_sub(&previous);
            if !self.send_all {
                if delta.is_eviction_artifact() || delta.is_idle() {
                    continue;
                }
            }
            msg_buf.push_record(
                name,
                delta.wr.max(0) as u64,
                delta.rd.max(0) as u64,
                delta.reqs.max(0) as u64,
            )?;
            sent += 1;
        }
        msg_buf.flush();
        Ok(sent)
    }

    fn fold(&mut self, client: &str, gen: u64, snapshot: ClientCounterSnapshot) {
        let slot = self.slots.entry(client.to_string()).or_default();
        let incoming = (gen % 2) as usize;
        if slot.gen < gen.saturating_sub(1) || gen == 0 {
            slot.stats = [ClientCounterSnapshot::default(); 2];
        } else if slot.gen == gen.saturating_sub(1) {
            slot.stats[incoming] = ClientCounterSnapshot::default();
        }
        slot.gen = gen;
        slot.stats[incoming] += snapshot;
    }
}

#[cfg(test)]
#[path = "generational_tests.rs"]
mod tests;
