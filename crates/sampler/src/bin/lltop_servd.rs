// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lltop-servd: long-lived generational delta sampler. Ticks on a
//! fixed interval, pushing each generation's per-client deltas as
//! newline-delimited UDP datagrams.

use std::net::UdpSocket;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use daemonize::Daemonize;
use lltop_core::LltopError;
use lltop_counters::TargetWalker;
use lltop_sampler::{DatagramSink, GenerationalSampler, MsgBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_ROOTS: &[&str] = &["/proc/fs/lustre/obdfilter", "/proc/fs/lustre/mdt"];
const DEFAULT_PORT: u16 = 9907;
const DATAGRAM_CAPACITY: usize = 1400;

#[derive(Parser)]
#[command(name = "lltop-servd", about = "Continuously sample Lustre client load and push deltas over UDP")]
struct Args {
    /// Seconds between generations
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// Destination host to send datagrams to
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Destination UDP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Emit every client's delta, including idle and eviction-artifact ones
    #[arg(long)]
    send_all: bool,

    /// Fork to the background and detach from the controlling terminal
    #[arg(long)]
    daemon: bool,

    /// Kernel export roots to scan
    #[arg(long = "root")]
    roots: Vec<PathBuf>,
}

struct UdpSink {
    socket: UdpSocket,
    dest: String,
}

impl DatagramSink for UdpSink {
    fn send(&mut self, data: &[u8]) {
        if let Err(err) = self.socket.send_to(data, &self.dest) {
            tracing::warn!(dest = %self.dest, error = %err, "failed to send sample datagram");
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.daemon {
        if let Err(err) = Daemonize::new().start() {
            eprintln!("lltop-servd: failed to daemonize: {err}");
            std::process::exit(1);
        }
    }

    setup_logging();
    if let Err(err) = run(args) {
        tracing::error!(error = %err, "fatal");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), LltopError> {
    let roots: Vec<PathBuf> = if args.roots.is_empty() {
        DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
    } else {
        args.roots
    };

    let walker = TargetWalker::new(&roots)
        .map_err(|err| LltopError::Structural(format!("could not open any Lustre export root: {err}")))?;

    let socket = UdpSocket::bind("0.0.0.0:0")
        .map_err(|err| LltopError::Structural(format!("could not bind UDP socket: {err}")))?;
    let sink = UdpSink {
        socket,
        dest: format!("{}:{}", args.host, args.port),
    };
    let mut msg_buf = MsgBuf::new(DATAGRAM_CAPACITY, sink);
    let mut sampler = GenerationalSampler::new(args.send_all);

    let interval = Duration::from_secs(args.interval);
    let mut gen: u64 = 0;
    loop {
        match sampler.tick(&walker, gen, &mut msg_buf) {
            Ok(sent) => tracing::debug!(generation = gen, records = sent, "tick complete"),
            Err(err) => tracing::warn!(generation = gen, error = %err, "dropped record in tick"),
        }
        gen += 1;
        std::thread::sleep(interval);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
