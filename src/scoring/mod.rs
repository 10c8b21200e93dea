// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The key rule is that scores are penalties. A title hit starts at 0, a
//! body hit at 2, and every compromise the matcher had to make (splitting
//! the query, skipping over text, reading terms out of order, leaning on a
//! synonym) adds a point.

mod core;
pub mod ranking;

pub use self::core::*;
