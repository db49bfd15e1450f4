// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enumerates Lustre targets under the kernel roots, and the per-client
//! export directories beneath each target.

use std::path::{Path, PathBuf};

use crate::error::CountersError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    pub name: String,
    pub exports_dir: PathBuf,
}

pub struct TargetWalker {
    opened_roots: Vec<PathBuf>,
}

impl TargetWalker {
    /// Opens as many of `roots` as exist; fatal only if none do.
    pub fn new(roots: &[PathBuf]) -> Result<Self, CountersError> {
        let opened_roots: Vec<PathBuf> = roots
            .iter()
            .filter(|root| root.is_dir())
            .cloned()
            .collect();
        if opened_roots.is_empty() {
            return Err(CountersError::NoRootsOpened(roots.to_vec()));
        }
        Ok(Self { opened_roots })
    }

    /// Lists every target (non-dot-prefixed child directory) across all
    /// opened roots.
    pub fn targets(&self) -> Vec<TargetDescriptor> {
        let mut targets = Vec::new();
        for root in &self.opened_roots {
            let Ok(entries) = std::fs::read_dir(root) else {
                tracing::warn!(root = %root.display(), "could not list target root");
                continue;
            };
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with('.') {
                    continue;
                }
                if !entry.path().is_dir() {
                    continue;
                }
                targets.push(TargetDescriptor {
                    name,
                    exports_dir: entry.path().join("exports"),
                });
            }
        }
        targets
    }

    /// Lists `(client_nid, stats_path)` pairs for one target's exports.
    pub fn clients(target: &TargetDescriptor) -> Vec<(String, PathBuf)> {
        clients_under(&target.exports_dir)
    }
}

fn clients_under(exports_dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(exports_dir) else {
        return Vec::new();
    };
    let mut clients = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let stats_path = entry.path().join("stats");
        if stats_path.is_file() {
            clients.push((name, stats_path));
        }
    }
    clients
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
