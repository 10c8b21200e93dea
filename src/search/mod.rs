// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! The query is prepared once, each field tries the whole phrase before
//! falling back to term-by-term fuzzy matching, and the engine ranks what
//! survives. Highlight rendering lives here too since it only makes sense
//! next to the hits it renders.

pub mod engine;
pub mod highlight;
pub mod matcher;
pub mod utils;

pub use engine::{search, search_with_defaults, Searcher};
