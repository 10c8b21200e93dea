// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for case- and accent-insensitive matching.
//!
//! "Überschrift", "uberschrift" and "ÜBERSCHRIFT" must all compare equal, so
//! everything the matcher looks at goes through [`normalize`] first:
//!
//! 1. Lowercase
//! 2. NFD normalize (decompose characters into base + combining marks)
//! 3. Filter out combining diacritical marks
//!
//! Lowercasing runs first because some uppercase letters lowercase into a
//! base letter plus a combining mark (`İ` → `i̇`). Doing it last would leave
//! that mark behind and break idempotence.
//!
//! Whitespace is left untouched here. Query preparation collapses it
//! separately (see `search::utils`).

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, decompose, strip diacritics.
///
/// - "Windzone" → "windzone"
/// - "Böenstaudruck" → "boenstaudruck"
/// - "café" → "cafe"
/// - "Straße" → "straße" (`ß` has no canonical decomposition)
pub fn normalize(value: &str) -> String {
    value.chars().flat_map(fold_char).collect()
}

/// Fold a single source character into zero or more normalized characters.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().nfd().filter(|c| !is_combining_mark(*c))
}

/// Check if a character is a combining diacritical mark.
///
/// Only the diacritic blocks are stripped. Vowel signs of abugidas are also
/// category Mn but carry meaning, so they stay.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Normalized text that remembers where each character came from.
///
/// Matching happens on normalized text, but highlights are drawn on the
/// original. Most of the time offsets line up one-to-one. They don't when a
/// character lowercases to two (`İ`) or when the source carries loose
/// combining marks (`e\u{301}`), so every normalized character records the
/// index of the source character that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    origins: Vec<usize>,
    source_len: usize,
}

impl NormalizedText {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origins = Vec::with_capacity(source.len());
        let mut source_len = 0;

        for (idx, c) in source.chars().enumerate() {
            for folded in fold_char(c) {
                text.push(folded);
                origins.push(idx);
            }
            source_len = idx + 1;
        }

        Self {
            text,
            origins,
            source_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.origins.len()
    }

    /// Map a half-open character span of the normalized text back onto the source.
    ///
    /// Combining marks that were stripped right after the span's last
    /// character are folded into the span, so a highlight over `e` also
    /// covers the accent that followed it.
    pub fn to_source_span(&self, start: usize, end: usize) -> (usize, usize) {
        let len = self.origins.len();
        let end = end.min(len);
        if start >= end {
            let at = self.origins.get(start).copied().unwrap_or(self.source_len);
            return (at, at);
        }

        let source_start = self.origins[start];
        let last = self.origins[end - 1] + 1;
        let source_end = match self.origins.get(end) {
            Some(&next) => last.max(next),
            None => self.source_len,
        };
        (source_start, source_end)
    }
}

/// Sort key for German-collated title comparison.
///
/// DIN 5007 variant 1: umlauts sort with their base letter and `ß` sorts as
/// `ss`. Case and accents are ignored at this level; callers break ties on
/// the raw string.
pub fn collation_key(value: &str) -> String {
    normalize(value).replace('ß', "ss")
}
