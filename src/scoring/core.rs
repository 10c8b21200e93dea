// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind help search ranking.
//!
//! Scores are penalties: 0 is perfect and every imperfection adds whole
//! points. A field's score is its base penalty plus the sum of the
//! [`Penalties`] its match collected.
//!
//! # Key Invariant: Phrase Beats Decomposition
//!
//! A full-phrase match carries no penalties at all. Every decomposed match
//! carries at least the decomposition point, so on the same field the phrase
//! path always wins.
//!
//! # Constants
//!
//! | Constant | Value | Effect |
//! |----------|-------|--------|
//! | Title base | 0 | Title hits rank first, all else equal |
//! | Body base | 2 | A perfect body hit ties a slightly imperfect title hit |
//! | Gap unit | 50 | One point per 50 characters between matched terms |
//! | Ceiling | 12 | Results above this are dropped |

use crate::fuzzy::count_inversions;
use crate::search::matcher::{match_field, TermHit};
use crate::search::utils::PreparedQuery;
use crate::types::{Field, FieldMatch, Page, Penalties, SynonymTable};
use crate::util::markup::{collapse_whitespace, extract_searchable_text};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Base penalty for matches in the page title.
pub const TITLE_BASE_PENALTY: u32 = 0;

/// Base penalty for matches in the page body.
pub const BODY_BASE_PENALTY: u32 = 2;

/// Characters of separation between matched terms that cost one point.
pub const GAP_UNIT: usize = 50;

/// Default maximum total penalty for a result to be returned.
pub const DEFAULT_SCORE_CEILING: u32 = 12;

/// Base penalty by field: Title (0) < Body (2).
pub fn base_penalty(field: Field) -> u32 {
    match field {
        Field::Title => TITLE_BASE_PENALTY,
        Field::Body => BODY_BASE_PENALTY,
    }
}

/// Gap penalty for matched spans already sorted by start.
///
/// Overlapping or touching spans contribute nothing.
pub fn gap_penalty(spans: &[(usize, usize)]) -> u32 {
    let total: usize = spans
        .windows(2)
        .map(|pair| pair[1].0.saturating_sub(pair[0].1))
        .sum();
    (total / GAP_UNIT) as u32
}

/// Word-order penalty: inversions of query positions taken in text order.
pub fn order_penalty(term_indices: &[usize]) -> u32 {
    count_inversions(term_indices) as u32
}

/// Penalties for a decomposed match.
///
/// `found` must be non-empty and sorted by text position.
pub fn decomposed_penalties(found: &[TermHit], full_term_present: bool) -> Penalties {
    let spans: Vec<(usize, usize)> = found.iter().map(|hit| (hit.start, hit.end)).collect();
    let order: Vec<usize> = found.iter().map(|hit| hit.term_index).collect();

    Penalties {
        decomposition: 1,
        gap: gap_penalty(&spans),
        order: order_penalty(&order),
        missing_full_term: u32::from(!full_term_present),
        synonyms: found.iter().filter(|hit| hit.via_synonym).count() as u32,
    }
}

/// The plain text a field is matched against.
///
/// Titles are used as written (whitespace collapsed); bodies go through the
/// markup extractor first.
pub fn field_text(page: &Page, field: Field) -> String {
    match field {
        Field::Title => collapse_whitespace(&page.title),
        Field::Body => extract_searchable_text(&page.body),
    }
}

/// Score one field of one page. `None` if the field does not match at all.
pub fn score_field(
    page: &Page,
    field: Field,
    query: &PreparedQuery,
    synonyms: &SynonymTable,
) -> Option<FieldMatch> {
    let text = field_text(page, field);
    if text.is_empty() {
        return None;
    }
    match_field(query, field, &text, synonyms)
}
