// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn help-page body markup into plain text the matcher can scan.
//!
//! Help bodies are HTML-ish with two house extensions:
//!
//! - FAQ blocks: `<faq question="Was ist die Windzone?">Antwort…</faq>`. The
//!   question lives in an attribute, so plain tag stripping would lose it.
//!   It is spliced in front of the answer instead.
//! - Cross-references: `[[windzone|Windzonen]]` renders as "Windzonen",
//!   `[[windzone]]` as "windzone".
//!
//! Everything else that looks like a tag is dropped. Nothing here can fail:
//! broken markup just leaves more text behind.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening FAQ element with its `question` attribute (double or single quoted).
static FAQ_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<faq(?:-item)?(?:\s[^>]*?)?\squestion\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>"#,
    )
    .expect("FAQ pattern is valid")
});

static FAQ_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</faq(?:-item)?\s*>").expect("FAQ close pattern is valid"));

/// `[[target]]` or `[[target|label]]`.
static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\]|]*)(?:\|([^\]]*))?\]\]").expect("wiki link pattern is valid")
});

/// Anything shaped like a tag, comment or doctype. A bare `<` in prose
/// (`a < b`) is not a tag.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("tag pattern is valid"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Extract searchable plain text from a page body.
///
/// # Example
///
/// ```
/// use helpsearch::extract_searchable_text;
///
/// let body = r#"<p>Siehe [[windzone|Windzonen]].</p><faq question="Was ist qp?">Der Staudruck.</faq>"#;
/// assert_eq!(
///     extract_searchable_text(body),
///     "Siehe Windzonen. Was ist qp? Der Staudruck."
/// );
/// ```
pub fn extract_searchable_text(raw: &str) -> String {
    let text = FAQ_OPEN.replace_all(raw, |caps: &Captures| {
        let question = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        format!(" {} ", question)
    });
    let text = FAQ_CLOSE.replace_all(&text, " ");
    let text = WIKI_LINK.replace_all(&text, |caps: &Captures| {
        let target = caps.get(1).map_or("", |m| m.as_str());
        match caps.get(2).map(|m| m.as_str()) {
            Some(label) if !label.trim().is_empty() => label.to_string(),
            _ => target.to_string(),
        }
    });
    let text = TAG.replace_all(&text, " ");
    let text = decode_entities(&text);

    collapse_whitespace(&text)
}

/// Decode the handful of entities help content actually uses.
///
/// `&amp;` goes last so `&amp;lt;` decodes to the literal text `&lt;`.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
