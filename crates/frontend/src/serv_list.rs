// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Site-local filesystem-to-server-list mapping. This table is
//! declared out of core scope by design, but its illustrative
//! hard-coded defaults are carried over verbatim so `--server-list`
//! has a working example out of the box.

struct FsRange {
    name: &'static str,
    mds: (u32, u32),
    oss: (u32, u32),
}

const RANGES: &[FsRange] = &[
    FsRange { name: "scratch", mds: (3, 4), oss: (23, 72) },
    FsRange { name: "share", mds: (1, 2), oss: (1, 6) },
    FsRange { name: "work", mds: (5, 6), oss: (7, 20) },
];

/// Expands a known filesystem name into its `mdsN`/`ossM` server list.
/// Returns `None` for an unrecognized name.
pub fn lookup(fs_name: &str) -> Option<Vec<String>> {
    let range = RANGES.iter().find(|r| r.name == fs_name)?;
    let mut servers = Vec::new();
    for i in range.mds.0..=range.mds.1 {
        servers.push(format!("mds{i}"));
    }
    for i in range.oss.0..=range.oss.1 {
        servers.push(format!("oss{i}"));
    }
    Some(servers)
}

#[cfg(test)]
#[path = "serv_list_tests.rs"]
mod tests;
