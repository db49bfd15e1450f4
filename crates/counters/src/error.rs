// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountersError {
    #[error("no Lustre target roots could be opened: tried {0:?}")]
    NoRootsOpened(Vec<std::path::PathBuf>),
}
