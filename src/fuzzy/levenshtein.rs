// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! The matcher compares every query term against every token of a field, and
//! most of those pairs are nowhere near each other, so the bounded variant
//! is the one on the hot path.
//!
//! Both variants keep a single DP row sized to the shorter string.

/// Maximum edit distance at which a token still counts as a fuzzy match.
///
/// Flat regardless of token length. This is lenient for 2-3 character tokens
/// ("die" is within 3 edits of "wind") and strict for long compounds.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Classic Levenshtein distance over Unicode scalar values.
///
/// Insertions, deletions and substitutions each cost 1.
///
/// ```
/// use helpsearch::levenshtein;
///
/// assert_eq!(levenshtein("windzne", "windzone"), 1);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = by_length(&a, &b);
    row_distance(long, short, usize::MAX)
}

/// Are these strings within `max` edits of each other? If so, how many?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: row minima never decrease, so once the whole row is over
/// the bound the final distance is too.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let (long, short) = by_length(&a, &b);
    let distance = row_distance(long, short, max);
    (distance <= max).then_some(distance)
}

fn by_length<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Single-row DP. Returns the exact distance, or some value greater than
/// `max` if the computation was abandoned.
fn row_distance(long: &[char], short: &[char], max: usize) -> usize {
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if row_min > max {
            return row_min;
        }
    }

    row[short.len()]
}
