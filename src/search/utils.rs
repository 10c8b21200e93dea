// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query parsing happens once per search, not once per field. Everything the
//! matcher needs from the query is computed here up front.

use crate::util::markup::collapse_whitespace;
use crate::util::normalize::normalize;

/// Parse a query string into normalized, whitespace-separated terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Wind  ZONE");
/// assert_eq!(terms, vec!["wind", "zone"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// A query, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// The query as typed, whitespace collapsed and trimmed.
    pub display: String,
    /// Normalized form of `display`; the phrase the full-match step looks for.
    pub normalized: String,
    /// `normalized` split on whitespace.
    pub terms: Vec<String>,
}

impl PreparedQuery {
    pub fn parse(query: &str) -> Self {
        let display = collapse_whitespace(query);
        let terms = parse_query(&display);
        let normalized = terms.join(" ");
        Self {
            display,
            normalized,
            terms,
        }
    }

    /// True when nothing is left to match once normalization is done.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Character index of the first occurrence of `needle` in `haystack`.
pub(crate) fn find_char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}
