// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load corpora and synonym tables from JSON files.
//!
//! Corpus files are a JSON array of `{ "id", "title", "body" }` objects.
//! Synonym files are a JSON object mapping a term to its alternatives.
//! Loaded corpora are validated (unique, non-empty ids) since the search
//! path itself trusts them.

use crate::error::LoadError;
use crate::types::{Corpus, SynonymTable};
use std::fs;
use std::path::Path;
use tracing::debug;

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and validate a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let corpus = Corpus::from_json_str(&read(path)?)?.validated()?;
    debug!(path = %path.display(), pages = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Read a synonym file.
pub fn load_synonyms(path: impl AsRef<Path>) -> Result<SynonymTable, LoadError> {
    let path = path.as_ref();
    let synonyms = SynonymTable::from_json_str(&read(path)?)?;
    debug!(path = %path.display(), terms = synonyms.len(), "loaded synonyms");
    Ok(synonyms)
}
