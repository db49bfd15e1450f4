// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawns one sampler subprocess per remote server and merges their
//! stdout into a single stream of lines.
//!
//! `std::process::Command` cannot literally `dup2` N children onto one
//! shared OS pipe the way the original `fork`/`exec` trick does, so the
//! merge is realized with one forwarding thread per child, each
//! draining that child's stdout and forwarding complete lines into a
//! single `mpsc::Sender`. Ordering across servers was never guaranteed
//! in the first place, so thread-interleaved delivery is conformant.
//! Pipe-creation failure (the child fails to spawn at all) is logged
//! per-server, not fatal to the whole fan-out.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

pub struct RemoteFanOut {
    receiver: Receiver<String>,
    workers: Vec<JoinHandle<()>>,
}

impl RemoteFanOut {
    /// Spawns `ssh server lltop_serv --interval=<interval>` for each
    /// server and begins forwarding its stdout lines.
    pub fn spawn(ssh: &str, lltop_serv: &str, interval: u64, send_all: bool, servers: &[String]) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut workers = Vec::with_capacity(servers.len());

        for server in servers {
            let mut command = Command::new(ssh);
            command.arg(server).arg(lltop_serv).arg(format!("--interval={interval}"));
            if send_all {
                command.arg("--send-all");
            }
            let mut child = match command
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(err) => {
                    tracing::warn!(server = %server, error = %err, "failed to spawn remote sampler");
                    continue;
                }
            };

            let Some(stdout) = child.stdout.take() else {
                tracing::warn!(server = %server, "remote sampler child has no stdout pipe");
                continue;
            };
            let tx = tx.clone();
            let server = server.clone();
            workers.push(std::thread::spawn(move || {
                let reader = BufReader::new(stdout);
                for line in reader.lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(server = %server, error = %err, "error reading remote sampler output");
                            break;
                        }
                    }
                }
                match child.wait() {
                    Ok(status) if !status.success() => {
                        tracing::warn!(server = %server, status = %status, "remote sampler exited non-zero");
                    }
                    Err(err) => {
                        tracing::warn!(server = %server, error = %err, "failed to reap remote sampler");
                    }
                    _ => {}
                }
            }));
        }
        drop(tx);

        Self { receiver: rx, workers }
    }

    /// Yields each forwarded line in arrival order until every child has
    /// exited and its forwarding thread has drained its pipe.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.receiver.iter()
    }

    /// Blocks until every forwarding thread (and the child it owns) has
    /// finished. Call after exhausting `lines()`.
    pub fn join(self) {
        for worker in self.workers {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
#[path = "fanout_tests.rs"]
mod tests;
