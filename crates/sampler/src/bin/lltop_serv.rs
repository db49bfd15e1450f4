// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lltop-serv: one-shot two-pass delta sampler, run once per
//! invocation from the remote side of a front-end fan-out.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use lltop_core::{LltopError, SystemClock};
use lltop_counters::TargetWalker;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_ROOTS: &[&str] = &["/proc/fs/lustre/obdfilter", "/proc/fs/lustre/mdt"];

#[derive(Parser)]
#[command(name = "lltop-serv", about = "Sample Lustre client load once and print deltas")]
struct Args {
    /// Seconds to sample over before printing deltas
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// Kernel export roots to scan (defaults to the standard obdfilter/mdt roots)
    #[arg(long = "root")]
    roots: Vec<PathBuf>,

    /// Emit every client's delta, including idle and eviction-artifact ones
    #[arg(long = "send-all")]
    send_all: bool,
}

fn main() {
    setup_logging();
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LltopError> {
    let args = Args::parse();
    let roots: Vec<PathBuf> = if args.roots.is_empty() {
        DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
    } else {
        args.roots
    };

    let walker = TargetWalker::new(&roots)
        .map_err(|err| LltopError::Structural(format!("could not open any Lustre export root: {err}")))?;

    let clock = SystemClock;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    lltop_sampler::run_oneshot(&walker, Duration::from_secs(args.interval), &clock, &mut handle, args.send_all);
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
