// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a help search.
//!
//! Pages and the corpus they live in, the synonym table, and the shapes that
//! come back out of matching and ranking.
//!
//! # Invariants
//!
//! - **Page**: immutable once built. A content change means a new `Corpus`.
//! - **Corpus**: page ids are unique and non-empty. The search path trusts
//!   this and does not check it; loaders can call [`Corpus::validated`].
//! - **Hit**: `start <= end`, both character offsets into the owning
//!   result's `text`.
//! - **ResultEntry**: `score <= ceiling` of the search that produced it.

use crate::error::LoadError;
use crate::util::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// =============================================================================
// CORPUS
// =============================================================================

/// One help page as registered by the content layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    /// Rich markup. See `util::markup` for what gets extracted.
    #[serde(default)]
    pub body: String,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// An ordered, read-only collection of pages.
///
/// Built once by the caller and handed to every search by reference. There
/// is no registry and no mutation: if help content changes, build a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pages: Vec<Page>,
}

impl Corpus {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Parse a JSON array of pages.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the id contract: every id non-empty, no id twice.
    pub fn validated(self) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            if page.id.is_empty() {
                return Err(LoadError::EmptyId(index));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(LoadError::DuplicateId(page.id.clone()));
            }
        }
        Ok(self)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by id. Linear; corpora are small.
    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }
}

impl FromIterator<Page> for Corpus {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

// =============================================================================
// SYNONYMS
// =============================================================================

/// Normalized term → normalized alternatives.
///
/// Lookups are one-directional: `"last" → ["belastung"]` does not imply the
/// reverse. Keys and alternatives are normalized on insertion so callers can
/// register words as they are written. Alternatives keep insertion order,
/// which is also the order the matcher tries them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `term → [alternatives]`.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register alternatives for a term, merging with any already present.
    ///
    /// Blank alternatives and alternatives equal to the term itself are skipped.
    pub fn insert<I, S>(&mut self, term: &str, alternatives: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize_term(term);
        if key.is_empty() {
            return;
        }

        let existing = self.entries.entry(key.clone()).or_default();
        for alternative in alternatives {
            let alternative = normalize_term(alternative.as_ref());
            if alternative.is_empty() || alternative == key || existing.contains(&alternative) {
                continue;
            }
            existing.push(alternative);
        }
        if existing.is_empty() {
            self.entries.remove(&key);
        }
    }

    /// Alternatives for a normalized term. Empty when none are registered.
    pub fn get(&self, term: &str) -> &[String] {
        self.entries.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_term(term: &str) -> String {
    normalize(term).split_whitespace().collect::<Vec<_>>().join(" ")
}

impl From<BTreeMap<String, Vec<String>>> for SynonymTable {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::new();
        for (term, alternatives) in raw {
            table.insert(&term, alternatives);
        }
        table
    }
}

impl From<SynonymTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SynonymTable) -> Self {
        table.entries
    }
}

impl<K, V, S> FromIterator<(K, V)> for SynonymTable
where
    K: AsRef<str>,
    V: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (term, alternatives) in iter {
            table.insert(term.as_ref(), alternatives);
        }
        table
    }
}

// =============================================================================
// MATCH RESULTS
// =============================================================================

/// Which part of a page matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Body,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "body",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field matched: the whole query as one phrase, or term by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Full,
    Decomposed,
}

/// What kind of evidence a highlight span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// The whole query, verbatim.
    Full,
    /// A single term, contained in or equal to a token.
    Exact,
    /// A single term within the edit-distance budget of a token.
    Fuzzy,
    /// A registered synonym of a term.
    Synonym,
}

/// A highlight span in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hit {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: HitKind,
    /// Position of the matched term in the query. `None` for full-phrase hits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_index: Option<usize>,
}

/// The penalty breakdown of a field match. Lower is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalties {
    /// 1 whenever the query had to be split into terms.
    pub decomposition: u32,
    /// One point per 50 characters between consecutive matched terms.
    pub gap: u32,
    /// One point per pair of terms found in swapped order.
    pub order: u32,
    /// 1 if the query as a whole never appears in the field.
    pub missing_full_term: u32,
    /// One point per term only found through a synonym.
    pub synonyms: u32,
}

impl Penalties {
    pub fn total(&self) -> u32 {
        self.decomposition + self.gap + self.order + self.missing_full_term + self.synonyms
    }
}

/// Everything known about how one field of one page matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: Field,
    pub match_type: MatchType,
    pub penalties: Penalties,
    pub base_penalty: u32,
    pub hits: Vec<Hit>,
    /// The field's plain text. Hit offsets index into this.
    pub text: String,
}

impl FieldMatch {
    pub fn score(&self) -> u32 {
        self.base_penalty + self.penalties.total()
    }
}

/// One ranked page in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub id: String,
    pub score: u32,
    pub field: Field,
    pub match_type: MatchType,
    pub penalties: Penalties,
    pub hits: Vec<Hit>,
    pub text: String,
    pub title: String,
}

impl ResultEntry {
    pub fn from_match(page: &Page, matched: FieldMatch) -> Self {
        Self {
            id: page.id.clone(),
            score: matched.score(),
            field: matched.field,
            match_type: matched.match_type,
            penalties: matched.penalties,
            hits: matched.hits,
            text: matched.text,
            title: page.title.clone(),
        }
    }
}

/// The answer to one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ResultEntry>,
}

impl SearchResponse {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }
}
