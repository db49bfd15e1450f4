// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lustre NID address parsing.

/// Strips the `@net` suffix from a Lustre NID (`10.0.0.1@tcp` ->
/// `10.0.0.1`). Returns the input unchanged if there is no `@`.
pub fn strip_net_suffix(addr: &str) -> &str {
    match addr.find('@') {
        Some(idx) => &addr[..idx],
        None => addr,
    }
}

#[cfg(test)]
#[path = "nid_tests.rs"]
mod tests;
