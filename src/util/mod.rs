// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text plumbing: everything that happens to a string before matching.
//!
//! Markup goes in, plain text comes out, gets normalized for accent- and
//! case-insensitive comparison, then cut into tokens with offsets that
//! survive the trip back to the original text.

pub mod markup;
pub mod normalize;
pub mod tokenize;
