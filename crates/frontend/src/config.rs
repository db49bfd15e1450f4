// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch front-end CLI surface.

use std::path::PathBuf;

use clap::Parser;

const DEFAULT_SSH: &str = "/usr/bin/ssh";
const DEFAULT_LLTOP_SERV: &str = "/usr/local/bin/lltop-serv";
const DEFAULT_EXECD_SPOOL: &str = "/share/sge6.2/execd_spool";

#[derive(Parser, Debug)]
#[command(name = "lltop", about = "Summarize Lustre client load, attributed to batch jobs")]
pub struct FrontConfig {
    /// Seconds to sample over
    #[arg(long, default_value_t = 10)]
    pub interval: u64,

    /// Keep the fully-qualified domain name instead of the short hostname
    #[arg(long)]
    pub fqdn: bool,

    /// External helper: `CMD <addr>` resolves a hostname
    #[arg(long = "get-host")]
    pub get_host: Option<String>,

    /// External helper: `CMD <host>` resolves a job id
    #[arg(long = "get-job")]
    pub get_job: Option<String>,

    /// Suppress the column header line
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Treat positional arguments as server names, not a filesystem label
    #[arg(short = 'l', long = "server-list")]
    pub server_list: bool,

    /// Path to the lltop-serv binary on remote hosts
    #[arg(long = "lltop-serv", env = "LLTOP_SERV_PATH", default_value = DEFAULT_LLTOP_SERV)]
    pub lltop_serv: PathBuf,

    /// Remote shell command
    #[arg(long, env = "LLTOP_SSH", default_value = DEFAULT_SSH)]
    pub ssh: PathBuf,

    /// Batch scheduler execd spool root
    #[arg(long = "execd-spool", env = "LLTOP_EXECD_SPOOL", default_value = DEFAULT_EXECD_SPOOL)]
    pub execd_spool: PathBuf,

    /// Emit every client's delta, including idle and eviction-artifact ones
    #[arg(long = "send-all")]
    pub send_all: bool,

    /// Filesystem label (resolved via the built-in server-list table) or,
    /// with `--server-list`, an explicit list of server names
    pub targets: Vec<String>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
