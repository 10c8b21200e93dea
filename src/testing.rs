//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Corpus, Page, SynonymTable};

/// Create a page from plain strings.
///
/// This is the canonical implementation used across all tests.
pub fn make_page(id: &str, title: &str, body: &str) -> Page {
    Page::new(id, title, body)
}

/// The single-page corpus most scenarios start from.
pub fn windzone_corpus() -> Corpus {
    Corpus::new(vec![make_page(
        "p1",
        "Windzone",
        "Die Windzone bestimmt den Staudruck.",
    )])
}

/// A small, realistic help corpus with markup, FAQs and cross-references.
pub fn help_corpus() -> Corpus {
    Corpus::new(vec![
        make_page(
            "windzone",
            "Windzone",
            "<p>Die Windzone ergibt sich aus dem Standort. Siehe [[gelaende|Geländekategorie]].</p>",
        ),
        make_page(
            "gelaende",
            "Geländekategorie",
            "<p>Die Rauigkeit des Geländes beeinflusst den Staudruck.</p>\
             <faq question=\"Welche Kategorie gilt in der Stadt?\">Meist Kategorie III.</faq>",
        ),
        make_page(
            "ballast",
            "Ballast",
            "<p>Ballast sichert das Modulfeld gegen Abheben und Verschieben.</p>",
        ),
        make_page(
            "abminderung",
            "Abminderung",
            "<p>Randbereiche erhalten höhere Sogbeiwerte; im Innenbereich gilt eine Abminderung.</p>",
        ),
        make_page(
            "dachneigung",
            "Dachneigung",
            "<h2>Flachdach</h2><p>Bis 5° gilt das Dach als Flachdach. Siehe [[windzone]].</p>",
        ),
    ])
}

/// Synonyms matching [`help_corpus`].
pub fn help_synonyms() -> SynonymTable {
    [
        ("sog", vec!["unterdruck", "sogbeiwerte"]),
        ("gewicht", vec!["ballast"]),
        ("neigung", vec!["dachneigung", "gefaelle"]),
    ]
    .into_iter()
    .collect()
}
