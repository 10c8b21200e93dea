// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The top-level search: every page, both fields, best one wins.
//!
//! The corpus is small enough to rescan on every query, so there is no
//! index. Each call normalizes the query once, scores title and body of
//! every page, keeps the better field, drops anything above the ceiling and
//! sorts what is left.
//!
//! Pure and synchronous: same inputs, same output, no hidden state.
//! Debouncing keystrokes or discarding stale responses is the caller's job.

use crate::config::SearchOptions;
use crate::scoring::ranking::{compare_results, pick_best_field};
use crate::scoring::score_field;
use crate::search::utils::PreparedQuery;
use crate::types::{Corpus, Field, ResultEntry, SearchResponse, SynonymTable};
use tracing::{debug, trace};

/// Search a corpus.
///
/// # Example
///
/// ```
/// use helpsearch::{search, Corpus, Page, SearchOptions, SynonymTable};
///
/// let corpus = Corpus::new(vec![Page::new(
///     "p1",
///     "Windzone",
///     "Die Windzone bestimmt den Staudruck.",
/// )]);
/// let response = search("windzone", &corpus, &SynonymTable::new(), &SearchOptions::default());
///
/// assert_eq!(response.results.len(), 1);
/// assert_eq!(response.results[0].score, 0);
/// ```
pub fn search(
    query: &str,
    corpus: &Corpus,
    synonyms: &SynonymTable,
    options: &SearchOptions,
) -> SearchResponse {
    let prepared = PreparedQuery::parse(query);
    if prepared.is_empty() {
        debug!(query = %prepared.display, "empty query, skipping search");
        return SearchResponse::empty(prepared.display);
    }

    let mut results: Vec<ResultEntry> = corpus
        .iter()
        .filter_map(|page| {
            let title = score_field(page, Field::Title, &prepared, synonyms);
            let body = score_field(page, Field::Body, &prepared, synonyms);
            let best = pick_best_field(title, body)?;

            if best.score() > options.score_ceiling {
                trace!(
                    page = %page.id,
                    score = best.score(),
                    ceiling = options.score_ceiling,
                    "dropped above ceiling"
                );
                return None;
            }
            Some(ResultEntry::from_match(page, best))
        })
        .collect();

    results.sort_by(compare_results);

    debug!(
        query = %prepared.display,
        terms = prepared.terms.len(),
        pages = corpus.len(),
        results = results.len(),
        "search complete"
    );

    SearchResponse {
        query: prepared.display,
        results,
    }
}

/// [`search`] with the default score ceiling.
pub fn search_with_defaults(query: &str, corpus: &Corpus, synonyms: &SynonymTable) -> SearchResponse {
    search(query, corpus, synonyms, &SearchOptions::default())
}

/// A corpus, its synonyms and options bundled for repeated queries.
///
/// Borrows everything; build one per corpus generation.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    corpus: &'a Corpus,
    synonyms: &'a SynonymTable,
    options: SearchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(corpus: &'a Corpus, synonyms: &'a SynonymTable) -> Self {
        Self {
            corpus,
            synonyms,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn search(&self, query: &str) -> SearchResponse {
        search(query, self.corpus, self.synonyms, &self.options)
    }
}
