// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded variant gives up early; it must never disagree with the
//! full computation about whether a pair is within budget.

#![no_main]

use arbitrary::Arbitrary;
use helpsearch::{levenshtein, levenshtein_within, MAX_EDIT_DISTANCE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(50).collect();
    let b: String = input.b.chars().take(50).collect();
    let max = usize::from(input.max) % (MAX_EDIT_DISTANCE + 3);

    let distance = levenshtein(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(distance, levenshtein(&b, &a));

    // INVARIANT 2: bounded by lengths
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(distance >= la.abs_diff(lb));
    assert!(distance <= la.max(lb));

    // INVARIANT 3: bounded variant agrees with the full one
    let bounded = levenshtein_within(&a, &b, max);
    if distance <= max {
        assert_eq!(bounded, Some(distance), "{:?} vs {:?} within {}", a, b, max);
    } else {
        assert_eq!(bounded, None, "{:?} vs {:?} within {}", a, b, max);
    }
});
