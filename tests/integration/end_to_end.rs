//! Files on disk through to the JSON the UI consumes.

use super::common::{help_corpus, help_synonyms, ids};
use helpsearch::{load_corpus, load_synonyms, Corpus, SearchOptions, Searcher, SynonymTable};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// Write the help fixtures to disk and load them back.
fn load_help() -> (TempDir, Corpus, SynonymTable) {
    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("pages.json");
    let synonyms = dir.path().join("synonyms.json");
    fs::write(&pages, serde_json::to_string(&help_corpus()).unwrap()).unwrap();
    fs::write(&synonyms, serde_json::to_string(&help_synonyms()).unwrap()).unwrap();

    let corpus = load_corpus(&pages).unwrap();
    let synonyms = load_synonyms(&synonyms).unwrap();
    (dir, corpus, synonyms)
}

#[test]
fn test_fixtures_survive_disk() {
    let (_dir, corpus, synonyms) = load_help();
    assert_eq!(corpus, help_corpus());
    assert_eq!(synonyms, help_synonyms());
}

#[test]
fn test_search_loaded_content() {
    let (_dir, corpus, synonyms) = load_help();
    let searcher = Searcher::new(&corpus, &synonyms);

    assert_eq!(ids(&searcher.search("windzone")), vec!["windzone", "dachneigung"]);
    assert_eq!(ids(&searcher.search("gewicht")), vec!["ballast"]);
}

#[test]
fn test_response_json_shape() {
    let (_dir, corpus, synonyms) = load_help();
    let response = Searcher::new(&corpus, &synonyms).search("gewicht");

    let value: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "query": "gewicht",
            "results": [{
                "id": "ballast",
                "score": 3,
                "field": "title",
                "matchType": "decomposed",
                "penalties": {
                    "decomposition": 1,
                    "gap": 0,
                    "order": 0,
                    "missingFullTerm": 1,
                    "synonyms": 1
                },
                "hits": [{ "start": 0, "end": 7, "type": "synonym", "termIndex": 0 }],
                "text": "Ballast",
                "title": "Ballast"
            }]
        })
    );
}

#[test]
fn test_full_hit_omits_term_index() {
    let (_dir, corpus, synonyms) = load_help();
    let response = Searcher::new(&corpus, &synonyms).search("windzone");

    let value: Value = serde_json::to_value(&response.results[0].hits[0]).unwrap();
    assert_eq!(value, json!({ "start": 0, "end": 8, "type": "full" }));
}

#[test]
fn test_options_from_json() {
    let (_dir, corpus, synonyms) = load_help();
    let options: SearchOptions = serde_json::from_str(r#"{"scoreCeiling": 0}"#).unwrap();

    let response = Searcher::new(&corpus, &synonyms)
        .with_options(options)
        .search("windzone");
    assert_eq!(ids(&response), vec!["windzone"]);
}
