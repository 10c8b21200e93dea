//! Body markup: what is searchable after extraction, and what is not.

use super::common::{make_page, run};
use helpsearch::{highlight, Corpus, Field, MatchType};

#[test]
fn test_faq_question_is_searchable() {
    let corpus = Corpus::new(vec![make_page(
        "faq",
        "Häufige Fragen",
        r#"<faq question="Wie schwer ist der Ballast?">Siehe Tabelle.</faq>"#,
    )]);

    let response = run("wie schwer ist der ballast", &corpus);
    let result = &response.results[0];
    assert_eq!(result.field, Field::Body);
    assert_eq!(result.match_type, MatchType::Full);
    assert_eq!(result.text, "Wie schwer ist der Ballast? Siehe Tabelle.");
    assert_eq!(
        highlight(&result.text, &result.hits, "[", "]"),
        "[Wie schwer ist der Ballast]? Siehe Tabelle."
    );
}

#[test]
fn test_wiki_link_label_replaces_target() {
    let corpus = Corpus::new(vec![make_page("w", "Verweise", "Siehe [[ballast|Auflast-Hinweise]]")]);

    let response = run("auflast-hinweise", &corpus);
    let result = &response.results[0];
    assert_eq!(result.text, "Siehe Auflast-Hinweise");
    assert_eq!((result.hits[0].start, result.hits[0].end), (6, 22));
}

#[test]
fn test_adjacent_tags_do_not_fuse_words() {
    let corpus = Corpus::new(vec![make_page("t", "Bild", "<b>Dach</b><i>rand</i>")]);
    assert!(run("dachrand", &corpus).results.is_empty());
}

#[test]
fn test_attribute_values_are_not_searchable() {
    let corpus = Corpus::new(vec![make_page(
        "t",
        "Bild",
        r#"<img alt="Ballastplan" src="x.png">Text"#,
    )]);
    assert!(run("ballastplan", &corpus).results.is_empty());
}

#[test]
fn test_entities_decoded() {
    let corpus = Corpus::new(vec![make_page("t", "Übersicht", "Dach &amp; Flachdach&nbsp;Regeln")]);

    let response = run("flachdach", &corpus);
    let result = &response.results[0];
    assert_eq!(result.text, "Dach & Flachdach Regeln");
    assert_eq!((result.hits[0].start, result.hits[0].end), (7, 16));
}
