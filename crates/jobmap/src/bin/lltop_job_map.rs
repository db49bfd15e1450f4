// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lltop-job-map: one full scan of the scheduler execd spool, printing
//! `<host> <job>\n` to stdout. No internal sleep loop; re-invoke on
//! whatever cadence the caller wants.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_SPOOL: &str = "/share/sge6.2/execd_spool";

#[derive(Parser)]
#[command(name = "lltop-job-map", about = "Scan the scheduler spool and print host-to-job bindings")]
struct Args {
    /// Scheduler execd spool root
    #[arg(long, env = "LLTOP_EXECD_SPOOL", default_value = DEFAULT_SPOOL)]
    execd_spool: PathBuf,
}

fn main() {
    setup_logging();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    lltop_jobmap::run_producer(&args.execd_spool, &mut handle);
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
