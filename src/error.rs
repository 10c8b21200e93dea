// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading corpora and synonym tables.
//!
//! Searching never fails. Getting content into memory can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("duplicate page id: {0}")]
    DuplicateId(String),

    #[error("page at index {0} has an empty id")]
    EmptyId(usize),
}
