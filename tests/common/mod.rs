//! Shared test utilities and fixtures.

#![allow(dead_code)]

use helpsearch::{search, Corpus, SearchOptions, SearchResponse, SynonymTable};

// Re-export canonical test fixtures from helpsearch::testing
pub use helpsearch::testing::{help_corpus, help_synonyms, make_page, windzone_corpus};

/// Search with no synonyms and the default ceiling.
pub fn run(query: &str, corpus: &Corpus) -> SearchResponse {
    search(query, corpus, &SynonymTable::new(), &SearchOptions::default())
}

/// Search the help corpus with its synonyms.
pub fn run_help(query: &str) -> SearchResponse {
    search(
        query,
        &help_corpus(),
        &help_synonyms(),
        &SearchOptions::default(),
    )
}

/// Result ids in rank order.
pub fn ids(response: &SearchResponse) -> Vec<&str> {
    response.results.iter().map(|r| r.id.as_str()).collect()
}

/// Assert results are sorted by score and no page repeats.
pub fn assert_well_ranked(response: &SearchResponse, ceiling: u32) {
    for pair in response.results.windows(2) {
        assert!(
            pair[0].score <= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
    let mut seen = std::collections::HashSet::new();
    for result in &response.results {
        assert!(seen.insert(result.id.as_str()), "duplicate result {}", result.id);
        assert!(
            result.score <= ceiling,
            "{} scored {} above ceiling {}",
            result.id,
            result.score,
            ceiling
        );
    }
}
