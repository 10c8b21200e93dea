//! Synonym expansion: alternatives are tried after the term itself and
//! cost one point when they are what matched.

use super::common::{make_page, run_help};
use helpsearch::{search, Corpus, Field, HitKind, SearchOptions, SynonymTable};

#[test]
fn test_synonym_finds_title() {
    let response = run_help("gewicht");

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.id, "ballast");
    assert_eq!(result.field, Field::Title);
    assert_eq!(result.penalties.synonyms, 1);
    assert_eq!(result.score, 3);
    assert_eq!(result.hits[0].kind, HitKind::Synonym);
    assert_eq!(result.hits[0].term_index, Some(0));
}

#[test]
fn test_no_synonyms_no_match() {
    let corpus = Corpus::new(vec![make_page("b", "Ballast", "")]);
    let response = search("gewicht", &corpus, &SynonymTable::new(), &SearchOptions::default());
    assert!(response.results.is_empty());
}

#[test]
fn test_synonym_in_body() {
    let corpus = Corpus::new(vec![make_page("a", "Abminderung", "Der Sog am Rand")]);
    let synonyms: SynonymTable = [("Unterdruck", ["Sog"])].into_iter().collect();

    let response = search("unterdruck", &corpus, &synonyms, &SearchOptions::default());
    let result = &response.results[0];
    assert_eq!(result.field, Field::Body);
    // body 2 + decomposition 1 + phrase 1 + synonym 1
    assert_eq!(result.score, 5);
    assert_eq!((result.hits[0].start, result.hits[0].end), (4, 7));
}

#[test]
fn test_literal_term_wins_over_synonym() {
    let corpus = Corpus::new(vec![make_page("a", "Abminderung", "Randbereiche erhalten höhere Sogbeiwerte")]);
    let synonyms: SynonymTable = [("sog", ["unterdruck"])].into_iter().collect();

    let response = search("randbereich sog", &corpus, &synonyms, &SearchOptions::default());
    let result = &response.results[0];
    assert_eq!(result.penalties.synonyms, 0);
    assert!(result.hits.iter().all(|h| h.kind == HitKind::Exact));
    assert_eq!(result.score, 4);
}

#[test]
fn test_synonyms_are_one_directional() {
    let corpus = Corpus::new(vec![make_page("u", "Unterdruck", "")]);
    let synonyms: SynonymTable = [("unterdruck", ["sog"])].into_iter().collect();

    // "sog" has no alternatives registered; "sog" vs "unterdruck" is too far
    let response = search("sog", &corpus, &synonyms, &SearchOptions::default());
    assert!(response.results.is_empty());
}
