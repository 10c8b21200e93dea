// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at a fixed help corpus. The search path has no
//! error type, so anything a user can type must produce a valid response.

#![no_main]

use helpsearch::testing::{help_corpus, help_synonyms};
use helpsearch::{search, Corpus, SearchOptions, SynonymTable, DEFAULT_SCORE_CEILING};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static FIXTURE: OnceLock<(Corpus, SynonymTable)> = OnceLock::new();
    let (corpus, synonyms) = FIXTURE.get_or_init(|| (help_corpus(), help_synonyms()));

    // Handle invalid UTF-8 and cap length to avoid timeouts
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();

    // INVARIANT 1: search() never panics
    let response = search(&query, corpus, synonyms, &SearchOptions::default());

    // INVARIANT 2: sorted, unique, within the ceiling
    let mut seen = HashSet::new();
    for pair in response.results.windows(2) {
        assert!(pair[0].score <= pair[1].score, "unsorted results for {:?}", query);
    }
    for result in &response.results {
        assert!(result.score <= DEFAULT_SCORE_CEILING);
        assert!(seen.insert(result.id.as_str()), "duplicate {} for {:?}", result.id, query);

        // INVARIANT 3: hits index into the returned text
        let len = result.text.chars().count();
        for hit in &result.hits {
            assert!(hit.start < hit.end && hit.end <= len, "bad hit {:?} for {:?}", hit, query);
        }
    }

    // INVARIANT 4: deterministic
    assert_eq!(response, search(&query, corpus, synonyms, &SearchOptions::default()));
});
