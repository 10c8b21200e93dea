// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase-first, then term-by-term field matching.
//!
//! A field is matched in two steps:
//!
//! 1. **Full phrase**: the normalized query appears verbatim in the
//!    normalized field text. Nothing beats this, so no penalties.
//! 2. **Decomposed**: the query is split into terms and each term looks for
//!    its best token: contained in it, within [`MAX_EDIT_DISTANCE`] edits of
//!    it, or the same via a registered synonym. Terms that find nothing are
//!    dropped; if all of them find nothing the field does not match.
//!
//! Penalties for the decomposed path are computed in `scoring::core`.
//!
//! All offsets here are character offsets into the normalized text until the
//! very end, where they are mapped back onto the field's plain text.

use crate::fuzzy::{levenshtein_within, MAX_EDIT_DISTANCE};
use crate::scoring::{base_penalty, decomposed_penalties};
use crate::search::utils::{find_char_offset, PreparedQuery};
use crate::types::{Field, FieldMatch, Hit, HitKind, MatchType, Penalties, SynonymTable};
use crate::util::normalize::NormalizedText;
use crate::util::tokenize::{tokenize, Token};
use tracing::trace;

/// Where one query term landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermHit {
    /// Position of the term in the query.
    pub term_index: usize,
    /// Character span in the normalized field text.
    pub start: usize,
    pub end: usize,
    /// Edit distance between the matched candidate and the token.
    pub distance: usize,
    /// The candidate that matched was a synonym, not the term itself.
    pub via_synonym: bool,
}

impl TermHit {
    pub fn kind(&self) -> HitKind {
        if self.via_synonym {
            HitKind::Synonym
        } else if self.distance == 0 {
            HitKind::Exact
        } else {
            HitKind::Fuzzy
        }
    }
}

/// Outcome of matching a single query term against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    Found(TermHit),
    Missing,
}

/// Match a prepared query against one field's plain text.
///
/// Returns `None` when neither the phrase nor any single term matched.
pub fn match_field(
    query: &PreparedQuery,
    field: Field,
    text: &str,
    synonyms: &SynonymTable,
) -> Option<FieldMatch> {
    if query.is_empty() {
        return None;
    }

    let normalized = NormalizedText::new(text);
    let haystack = normalized.as_str();

    // Step 1: full phrase
    if let Some(start) = find_char_offset(haystack, &query.normalized) {
        let end = start + query.normalized.chars().count();
        let (start, end) = normalized.to_source_span(start, end);
        return Some(FieldMatch {
            field,
            match_type: MatchType::Full,
            penalties: Penalties::default(),
            base_penalty: base_penalty(field),
            hits: vec![Hit {
                start,
                end,
                kind: HitKind::Full,
                term_index: None,
            }],
            text: text.to_string(),
        });
    }

    // Step 2: term by term
    let tokens = tokenize(haystack);
    let mut found: Vec<TermHit> = query
        .terms
        .iter()
        .enumerate()
        .filter_map(|(term_index, term)| {
            match match_term(term_index, term, haystack, &tokens, synonyms) {
                TermMatch::Found(hit) => Some(hit),
                TermMatch::Missing => None,
            }
        })
        .collect();

    if found.is_empty() {
        return None;
    }

    found.sort_by_key(|hit| (hit.start, hit.term_index));

    // Step 1 already failed, so this is 1 unless the two checks ever diverge
    let full_term_present = haystack.contains(query.normalized.as_str());
    let penalties = decomposed_penalties(&found, full_term_present);

    trace!(
        field = %field,
        matched = found.len(),
        terms = query.terms.len(),
        ?penalties,
        "decomposed field match"
    );

    let hits = found
        .iter()
        .map(|hit| {
            let (start, end) = normalized.to_source_span(hit.start, hit.end);
            Hit {
                start,
                end,
                kind: hit.kind(),
                term_index: Some(hit.term_index),
            }
        })
        .collect();

    Some(FieldMatch {
        field,
        match_type: MatchType::Decomposed,
        penalties,
        base_penalty: base_penalty(field),
        hits,
        text: text.to_string(),
    })
}

/// Find the best token for one query term.
///
/// Candidates are the term itself, then its synonyms in table order. Best
/// means: smallest distance, then the literal term over a synonym, then the
/// earliest token, then the earliest candidate.
pub fn match_term(
    term_index: usize,
    term: &str,
    haystack: &str,
    tokens: &[Token],
    synonyms: &SynonymTable,
) -> TermMatch {
    let candidates = std::iter::once((term, false))
        .chain(synonyms.get(term).iter().map(|alt| (alt.as_str(), true)));

    let mut best: Option<TermHit> = None;
    for (candidate, via_synonym) in candidates {
        for (distance, start, end) in candidate_hits(candidate, haystack, tokens) {
            let hit = TermHit {
                term_index,
                start,
                end,
                distance,
                via_synonym,
            };
            let better = match &best {
                None => true,
                Some(current) => rank(&hit) < rank(current),
            };
            if better {
                best = Some(hit);
            }
        }
    }

    best.map_or(TermMatch::Missing, TermMatch::Found)
}

fn rank(hit: &TermHit) -> (usize, bool, usize) {
    (hit.distance, hit.via_synonym, hit.start)
}

/// Every accepted `(distance, start, end)` for one candidate, in text order.
///
/// Multi-word candidates (only synonyms can be multi-word) are matched as a
/// phrase against the whole text. Single words are checked token by token:
/// containment is an exact match on the contained span, otherwise the whole
/// token is accepted if it is within the edit budget.
fn candidate_hits(
    candidate: &str,
    haystack: &str,
    tokens: &[Token],
) -> Vec<(usize, usize, usize)> {
    let candidate_len = candidate.chars().count();

    if candidate.contains(' ') {
        return find_char_offset(haystack, candidate)
            .map(|start| (0, start, start + candidate_len))
            .into_iter()
            .collect();
    }

    tokens
        .iter()
        .filter_map(|token| {
            if let Some(offset) = find_char_offset(&token.text, candidate) {
                let start = token.start + offset;
                return Some((0, start, start + candidate_len));
            }
            levenshtein_within(candidate, &token.text, MAX_EDIT_DISTANCE)
                .map(|distance| (distance, token.start, token.end))
        })
        .collect()
}
