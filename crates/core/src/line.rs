// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire-line parsing for sampler output: `NAME WR RD REQS`.

/// Parses one sampler output line. Returns `None` (the caller logs and
/// skips) if the line does not have exactly four whitespace-delimited
/// tokens or any numeric field fails to parse.
pub fn parse_sampler_line(line: &str) -> Option<(String, u64, u64, u64)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let wr = tokens.next()?.parse().ok()?;
    let rd = tokens.next()?.parse().ok()?;
    let reqs = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((name.to_string(), wr, rd, reqs))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
