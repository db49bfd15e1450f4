// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parses a Lustre client `stats` pseudo-file into a counter snapshot.
//!
//! Format: the first line carries an unreliable `snapshot_time` and is
//! discarded. Each subsequent line is `NAME SAMPLES samples [UNITS] MIN
//! MAX SUM` (trailing fields beyond `samples` are optional and ignored
//! here). `write_bytes`/`read_bytes` contribute their `SUM` to `wr`/`rd`;
//! `ping` is ignored entirely; every other counter's `SAMPLES` is summed
//! into `reqs`.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use lltop_core::ClientCounterSnapshot;

pub fn read_client_stats(path: &Path) -> ClientCounterSnapshot {
    match fs::File::open(path) {
        Ok(file) => parse_stats(std::io::BufReader::new(file)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not open client stats file");
            ClientCounterSnapshot::default()
        }
    }
}

pub fn parse_stats(reader: impl BufRead) -> ClientCounterSnapshot {
    let mut snapshot = ClientCounterSnapshot::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "error reading stats line");
                break;
            }
        };
        if idx == 0 {
            // snapshot_time line: unreliable, always discarded.
            continue;
        }
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            tracing::warn!(line = %line, "skipping unparsable stats line");
            continue;
        };
        let Some(samples_tok) = fields.next() else {
            tracing::warn!(line = %line, "skipping unparsable stats line");
            continue;
        };
        let Ok(samples) = samples_tok.parse::<i64>() else {
            tracing::warn!(line = %line, "skipping unparsable stats line");
            continue;
        };

        match name {
            "ping" => continue,
            "write_bytes" | "read_bytes" => {
                let Some(sum) = last_numeric_field(fields) else {
                    tracing::warn!(line = %line, "skipping unparsable stats line");
                    continue;
                };
                if name == "write_bytes" {
                    snapshot.wr += sum;
                } else {
                    snapshot.rd += sum;
                }
            }
            _ => snapshot.reqs += samples,
        }
    }
    snapshot
}

/// The stats line's last whitespace-delimited token is the cumulative
/// sum; a leading `[units]` token, if present, is simply skipped as we
/// scan to the end.
fn last_numeric_field<'a>(fields: impl Iterator<Item = &'a str>) -> Option<i64> {
    fields.last()?.parse().ok()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
