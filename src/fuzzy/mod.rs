// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy primitives: typo tolerance via edit distance, and inversion
//! counting for word-order penalties.

mod inversions;
mod levenshtein;

pub use inversions::*;
pub use levenshtein::*;
