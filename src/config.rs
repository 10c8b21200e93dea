// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-search options.

use crate::scoring::DEFAULT_SCORE_CEILING;
use serde::{Deserialize, Serialize};

/// Knobs a caller may turn per search. Everything else is a constant in
/// `scoring` or `fuzzy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Highest total penalty a page may have and still be returned.
    pub score_ceiling: u32,
}

impl SearchOptions {
    pub fn with_score_ceiling(score_ceiling: u32) -> Self {
        Self { score_ceiling }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            score_ceiling: DEFAULT_SCORE_CEILING,
        }
    }
}
