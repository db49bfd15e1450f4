// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the lltop pipeline.
//!
//! Only the two fatal kinds are represented here. Transient I/O, soft
//! not-found, eviction artifacts, and protocol parse failures are never
//! propagated as `Err` — callers log and continue.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LltopError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("structural failure: {0}")]
    Structural(String),
}
