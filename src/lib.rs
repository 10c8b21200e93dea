// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over a small corpus of help pages.
//!
//! Given a free-text query, every page's title and body are matched and the
//! pages come back ranked by a penalty score, with highlight spans attached.
//! Matching is typo-tolerant (edit distance up to 3), synonym-aware, and
//! insensitive to case and accents.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    util/     │────▶│   search/    │────▶│  scoring/    │
//! │ (normalize,  │     │  (matcher:   │     │ (penalties,  │
//! │  markup,     │     │  phrase then │     │  ranking)    │
//! │  tokenize)   │     │  decomposed) │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                fuzzy/ (levenshtein, inversions)          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring
//!
//! Scores are penalties, lower is better:
//!
//! | Component | Points |
//! |-----------|--------|
//! | Body field (title is free) | 2 |
//! | Query had to be split into terms | 1 |
//! | Every 50 characters between matched terms | 1 |
//! | Every pair of terms in swapped order | 1 |
//! | Whole query never appears verbatim | 1 |
//! | Every term only found through a synonym | 1 |
//!
//! Pages scoring above the ceiling (default 12) are dropped.
//!
//! # Usage
//!
//! ```
//! use helpsearch::{search, Corpus, Page, SearchOptions, SynonymTable};
//!
//! let corpus = Corpus::new(vec![
//!     Page::new("p1", "Windzone", "Die Windzone bestimmt den Staudruck."),
//! ]);
//! let response = search("wind zone", &corpus, &SynonymTable::new(), &SearchOptions::default());
//!
//! assert_eq!(response.results[0].id, "p1");
//! assert_eq!(response.results[0].score, 2);
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod load;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use config::SearchOptions;
pub use error::LoadError;
pub use fuzzy::{count_inversions, levenshtein, levenshtein_within, MAX_EDIT_DISTANCE};
pub use load::{load_corpus, load_synonyms};
pub use scoring::ranking::{compare_results, pick_best_field};
pub use scoring::{
    base_penalty, field_text, score_field, BODY_BASE_PENALTY, DEFAULT_SCORE_CEILING, GAP_UNIT,
    TITLE_BASE_PENALTY,
};
pub use search::highlight::{highlight, merge_spans};
pub use search::matcher::{match_field, TermHit, TermMatch};
pub use search::utils::{parse_query, PreparedQuery};
pub use search::{search, search_with_defaults, Searcher};
pub use types::{
    Corpus, Field, FieldMatch, Hit, HitKind, MatchType, Page, Penalties, ResultEntry,
    SearchResponse, SynonymTable,
};
pub use util::markup::extract_searchable_text;
pub use util::normalize::{collation_key, normalize, NormalizedText};
pub use util::tokenize::{tokenize, Token};
