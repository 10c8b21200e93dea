//! The reference scenarios for the single-page "Windzone" corpus.
//!
//! Page: `{ id: "p1", title: "Windzone", body: "Die Windzone bestimmt den Staudruck." }`

use super::common::{make_page, run, windzone_corpus};
use helpsearch::{
    search, Corpus, Field, HitKind, MatchType, Penalties, SearchOptions, SynonymTable,
};

#[test]
fn test_exact_title_phrase() {
    let response = run("windzone", &windzone_corpus());

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.id, "p1");
    assert_eq!(result.field, Field::Title);
    assert_eq!(result.score, 0);
    assert_eq!(result.match_type, MatchType::Full);
    assert_eq!(result.hits.len(), 1);
    assert_eq!((result.hits[0].start, result.hits[0].end), (0, 8));
    assert_eq!(result.hits[0].kind, HitKind::Full);
}

#[test]
fn test_split_query_against_compound_title() {
    let response = run("wind zone", &windzone_corpus());

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.field, Field::Title);
    assert_eq!(result.match_type, MatchType::Decomposed);
    assert_eq!(
        result.penalties,
        Penalties {
            decomposition: 1,
            gap: 0,
            order: 0,
            missing_full_term: 1,
            synonyms: 0,
        }
    );
    assert_eq!(result.score, 2);
}

#[test]
fn test_typo_in_single_term() {
    let response = run("windzne", &windzone_corpus());

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.field, Field::Title);
    assert_eq!(result.match_type, MatchType::Decomposed);
    assert_eq!(result.penalties.decomposition, 1);
    assert_eq!(result.penalties.missing_full_term, 1);
    assert_eq!(result.score, 2);
    assert_eq!(result.hits[0].kind, HitKind::Fuzzy);
}

#[test]
fn test_everything_above_ceiling_is_dropped() {
    // Body base 2 + decomposition 1 + phrase 1 + gap 452/50 = 9 → 13
    let body = format!("alpha {} omega", "-".repeat(450));
    let corpus = Corpus::new(vec![make_page("far", "Xq", &body)]);

    let response = run("alpha omega", &corpus);
    assert!(response.results.is_empty());

    // Same page, ceiling raised: the score really is 13
    let relaxed = search(
        "alpha omega",
        &corpus,
        &SynonymTable::new(),
        &SearchOptions::with_score_ceiling(13),
    );
    assert_eq!(relaxed.results.len(), 1);
    assert_eq!(relaxed.results[0].score, 13);
    assert_eq!(relaxed.results[0].penalties.gap, 9);
}

#[test]
fn test_equal_scores_sort_by_german_title() {
    let corpus = Corpus::new(vec![
        make_page("b", "Ballast", "Hinweis zur Statik."),
        make_page("a", "Abminderung", "Hinweis zur Statik."),
    ]);

    let response = run("statik", &corpus);
    let titles: Vec<&str> = response.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Abminderung", "Ballast"]);
    assert!(response.results.iter().all(|r| r.score == 2));
}

#[test]
fn test_title_phrase_beats_body_phrase() {
    let corpus = Corpus::new(vec![
        make_page("body", "Lastannahmen", "Die Windzone hängt vom Standort ab."),
        make_page("title", "Windzone", "Siehe Karte."),
    ]);

    let response = run("Windzone", &corpus);
    assert_eq!(response.results[0].id, "title");
    assert_eq!(response.results[0].score, 0);
    assert_eq!(response.results[1].id, "body");
    assert!(response.results[1].score >= 2);
}

#[test]
fn test_phrase_never_worse_than_decomposition() {
    // Both terms verbatim and adjacent: phrase path, not decomposition
    let corpus = Corpus::new(vec![make_page("p", "Wind Zone", "")]);
    let response = run("wind zone", &corpus);
    assert_eq!(response.results[0].match_type, MatchType::Full);
    assert_eq!(response.results[0].score, 0);

    // Reordered: decomposition, strictly worse
    let reordered = run("zone wind", &corpus);
    assert_eq!(reordered.results[0].match_type, MatchType::Decomposed);
    assert!(reordered.results[0].score > response.results[0].score);
}
