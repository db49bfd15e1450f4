// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lltop: batch front end. Fans out to one sampler per server, parses
//! each line at the NID boundary, attributes it through the
//! address/host/job cache chain, and prints the sorted job table.

use std::io;

use anyhow::Result;
use clap::Parser;
use lltop_aggregate::Aggregator;
use lltop_core::{line::parse_sampler_line, nid::strip_net_suffix, LltopError};
use lltop_frontend::{serv_list, FrontConfig, RemoteFanOut};
use lltop_resolve::host::{ExternalHostResolver, HostResolver, SystemHostResolver};
use lltop_resolve::job::{ExternalJobResolver, JobResolver, SpoolJobResolver};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    setup_logging();
    if let Err(err) = run() {
        eprintln!("lltop: {}", format_error(&err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = FrontConfig::parse();

    let servers = resolve_servers(&config)?;

    let host_resolver: Box<dyn HostResolver> = match &config.get_host {
        Some(command) => Box::new(ExternalHostResolver::new(command.clone())),
        None => Box::new(SystemHostResolver::new(config.fqdn)),
    };
    let job_resolver: Box<dyn JobResolver> = match &config.get_job {
        Some(command) => Box::new(ExternalJobResolver::new(command.clone())),
        None => Box::new(SpoolJobResolver::new(config.execd_spool.clone())),
    };
    let mut aggregator = Aggregator::new(host_resolver, job_resolver);

    let fanout = RemoteFanOut::spawn(
        &config.ssh.to_string_lossy(),
        &config.lltop_serv.to_string_lossy(),
        config.interval,
        config.send_all,
        &servers,
    );
    for line in fanout.lines() {
        let Some((addr, wr, rd, reqs)) = parse_sampler_line(&line) else {
            tracing::warn!(line = %line, "skipping malformed sampler line");
            continue;
        };
        let addr = strip_net_suffix(&addr);
        aggregator.account(addr, wr, rd, reqs);
    }
    fanout.join();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    aggregator.finish(&mut handle, !config.no_header);
    Ok(())
}

fn resolve_servers(config: &FrontConfig) -> Result<Vec<String>> {
    if config.targets.is_empty() {
        return Err(LltopError::Configuration("no filesystem or server names given".to_string()).into());
    }
    if config.server_list {
        return Ok(config.targets.clone());
    }
    if config.targets.len() != 1 {
        return Err(LltopError::Configuration(
            "expected exactly one filesystem name (pass --server-list for explicit server names)".to_string(),
        )
        .into());
    }
    let fs_name = &config.targets[0];
    serv_list::lookup(fs_name)
        .ok_or_else(|| LltopError::Configuration(format!("unknown filesystem \"{fs_name}\"")).into())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain when the top-level
/// message already contains its source's text.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err.chain().skip(1).all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}
