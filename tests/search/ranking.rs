//! Ranking across a realistic help corpus.
//!
//! Pages link to each other, so most terms appear in one page's title and
//! another page's body. Title hits must come first.

use super::common::{assert_well_ranked, ids, run_help};
use helpsearch::{Field, HitKind, MatchType, DEFAULT_SCORE_CEILING};

#[test]
fn test_title_page_before_linking_page() {
    let response = run_help("windzone");
    assert_well_ranked(&response, DEFAULT_SCORE_CEILING);

    assert_eq!(ids(&response), vec!["windzone", "dachneigung"]);
    assert_eq!(response.results[0].field, Field::Title);
    assert_eq!(response.results[0].score, 0);

    // Found through the bare `[[windzone]]` link target
    let linking = &response.results[1];
    assert_eq!(linking.field, Field::Body);
    assert_eq!(linking.score, 2);
    assert_eq!(linking.match_type, MatchType::Full);
}

#[test]
fn test_wiki_label_is_searchable() {
    let response = run_help("Geländekategorie");
    assert_eq!(ids(&response), vec!["gelaende", "windzone"]);

    let linking = &response.results[1];
    assert_eq!(linking.field, Field::Body);
    let hit = linking.hits[0];
    let highlighted: String = linking.text.chars().skip(hit.start).take(hit.end - hit.start).collect();
    assert_eq!(highlighted, "Geländekategorie");
}

#[test]
fn test_diacritic_insensitive_title() {
    let with = run_help("Geländekategorie");
    let without = run_help("gelandekategorie");
    assert_eq!(with.results, without.results);
}

#[test]
fn test_word_order_costs_a_point() {
    let in_order = run_help("modulfeld verschieben");
    let reversed = run_help("verschieben modulfeld");

    assert_eq!(in_order.results[0].id, "ballast");
    assert_eq!(reversed.results[0].id, "ballast");
    assert_eq!(in_order.results[0].penalties.order, 0);
    assert_eq!(reversed.results[0].penalties.order, 1);
    assert_eq!(reversed.results[0].score, in_order.results[0].score + 1);
}

#[test]
fn test_title_decomposition_beats_body_decomposition() {
    let response = run_help("kategorie stadt");
    assert_well_ranked(&response, DEFAULT_SCORE_CEILING);

    let first = &response.results[0];
    assert_eq!(first.id, "gelaende");
    assert_eq!(first.field, Field::Title);
    assert_eq!(first.score, 2);
}

#[test]
fn test_substring_phrase_inside_compound() {
    // "sog" is a verbatim substring of "Sogbeiwerte": a full phrase match
    let response = run_help("sog");
    assert_well_ranked(&response, DEFAULT_SCORE_CEILING);

    let first = &response.results[0];
    assert_eq!(first.id, "abminderung");
    assert_eq!(first.match_type, MatchType::Full);
    assert_eq!(first.score, 2);
    assert_eq!(first.hits[0].kind, HitKind::Full);
}

#[test]
fn test_nothing_matches() {
    assert!(run_help("xylophon").results.is_empty());
}
