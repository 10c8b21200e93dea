// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render hit spans into text.
//!
//! Results carry character-offset hits so a UI can draw highlights without
//! rerunning the matcher. This is the reference renderer: the CLI uses it
//! with ANSI codes, tests use it with brackets.

use crate::types::Hit;

/// Merge overlapping or touching hit spans into sorted, disjoint spans.
pub fn merge_spans(hits: &[Hit]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = hits
        .iter()
        .filter(|hit| hit.start < hit.end)
        .map(|hit| (hit.start, hit.end))
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Wrap every hit span of `text` in `open` / `close`.
///
/// Spans past the end of the text are clipped.
///
/// ```
/// use helpsearch::{highlight, Hit, HitKind};
///
/// let hits = [Hit { start: 4, end: 12, kind: HitKind::Full, term_index: None }];
/// assert_eq!(highlight("Die Windzone", &hits, "[", "]"), "Die [Windzone]");
/// ```
pub fn highlight(text: &str, hits: &[Hit], open: &str, close: &str) -> String {
    let spans = merge_spans(hits);
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut spans = spans.into_iter().peekable();
    let mut inside = false;

    for (idx, c) in text.chars().enumerate() {
        if inside && spans.peek().is_some_and(|&(_, end)| idx == end) {
            out.push_str(close);
            inside = false;
            spans.next();
        }
        if !inside && spans.peek().is_some_and(|&(start, _)| idx == start) {
            out.push_str(open);
            inside = true;
        }
        out.push(c);
    }
    if inside {
        out.push_str(close);
    }
    out
}
