// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: which field represents a page, and how pages are sorted.
//!
//! Sort order is ascending penalty, then title in German collation. Two
//! more tiebreakers (raw title, then id) make the order total, so the same
//! inputs always produce the same list.

use crate::types::{FieldMatch, ResultEntry};
use crate::util::normalize::collation_key;
use std::cmp::Ordering;

/// Pick the field that represents a page: lower score wins, title on ties.
pub fn pick_best_field(title: Option<FieldMatch>, body: Option<FieldMatch>) -> Option<FieldMatch> {
    match (title, body) {
        (Some(title), Some(body)) => {
            if body.score() < title.score() {
                Some(body)
            } else {
                Some(title)
            }
        }
        (title, None) => title,
        (None, body) => body,
    }
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - ascending, fewer penalty points first
/// 2. **Title** - German collation (`Ärger` sorts with `Arger`, `ß` as `ss`)
/// 3. **Title** - raw string, so case and accent variants stay stable
/// 4. **Id** - final tiebreaker when everything else is equal
pub fn compare_results(a: &ResultEntry, b: &ResultEntry) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| collation_key(&a.title).cmp(&collation_key(&b.title)))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}
