// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width output table: `JOBID WR_MB RD_MB REQS`, left-padded name
//! and right-padded numeric columns, matching the original tool's
//! `%-16s %8lu %8lu %8lu` layout.

use std::io::Write;

use lltop_core::NameStats;

pub fn print_header(out: &mut impl Write) {
    let _ = writeln!(out, "{:<16} {:>8} {:>8} {:>8}", "JOBID", "WR_MB", "RD_MB", "REQS");
}

pub fn print_row(out: &mut impl Write, row: &NameStats) {
    let _ = writeln!(
        out,
        "{:<16} {:>8} {:>8} {:>8}",
        row.final_name,
        row.wr_mib(),
        row.rd_mib(),
        row.reqs
    );
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
