// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Address -> hostname resolution.

use std::net::IpAddr;
use std::process::Command;

/// Resolves a dotted-quad address to a hostname. Any failure degrades
/// to "not found" (`None`) so that attribution falls back to the
/// address itself — resolvers are never allowed to kill the pipeline.
pub trait HostResolver {
    fn resolve(&self, addr: &str) -> Option<String>;
}

/// Reverse-DNS resolver. Unless `fqdn` is set, the result is truncated
/// at the first `.` to the short hostname.
pub struct SystemHostResolver {
    pub fqdn: bool,
}

impl SystemHostResolver {
    pub fn new(fqdn: bool) -> Self {
        Self { fqdn }
    }
}

impl HostResolver for SystemHostResolver {
    fn resolve(&self, addr: &str) -> Option<String> {
        let ip: IpAddr = addr.parse().ok()?;
        let name = match dns_lookup::lookup_addr(&ip) {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!(addr = %addr, error = %err, "reverse lookup failed");
                return None;
            }
        };
        if self.fqdn {
            Some(name)
        } else {
            Some(name.split('.').next().unwrap_or(&name).to_string())
        }
    }
}

/// Runs an external helper command as `helper <address>` and takes its
/// first whitespace-delimited stdout token as the hostname. Success
/// requires a zero exit status and at least one non-whitespace token.
pub struct ExternalHostResolver {
    pub command: String,
}

impl ExternalHostResolver {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl HostResolver for ExternalHostResolver {
    fn resolve(&self, addr: &str) -> Option<String> {
        let output = match Command::new(&self.command).arg(addr).output() {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(command = %self.command, error = %err, "host resolver helper failed to spawn");
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
#[path = "host_tests.rs"]
mod tests;
