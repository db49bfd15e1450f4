// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lustre-side counter samplers: the one-shot two-pass delta sampler
//! (`lltop-serv`) and the long-lived generational sampler
//! (`lltop-servd`) that pushes deltas out over UDP.

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod generational;
pub mod msgbuf;
pub mod oneshot;

pub use generational::{GenerationalSampler, PerClientSlot};
pub use msgbuf::{DatagramSink, MsgBuf, MsgBufError};
pub use oneshot::run as run_oneshot;
