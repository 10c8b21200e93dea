// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the helpsearch CLI.
//!
//! Plain ANSI colors, only when stdout is a TTY and `NO_COLOR` is unset.
//! Hits are highlighted in place; the penalty breakdown is dimmed next to
//! each result so you can see why it ranked where it did.

use helpsearch::{highlight, Corpus, MatchType, ResultEntry, SearchResponse};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Highlight markers: ANSI on a TTY, brackets otherwise.
fn markers() -> (String, &'static str) {
    if use_colors() {
        (format!("{}{}", BOLD, YELLOW), RESET)
    } else {
        ("[".to_string(), "]")
    }
}

fn score_color(score: u32) -> &'static str {
    match score {
        0..=2 => GREEN,
        3..=6 => YELLOW,
        _ => RED,
    }
}

fn breakdown(entry: &ResultEntry) -> String {
    let p = &entry.penalties;
    match entry.match_type {
        MatchType::Full => format!("{} full", entry.field),
        MatchType::Decomposed => format!(
            "{} decomposed: split {} gap {} order {} phrase {} synonyms {}",
            entry.field, p.decomposition, p.gap, p.order, p.missing_full_term, p.synonyms
        ),
    }
}

/// Print ranked results, at most `limit` of them.
pub fn print_results(response: &SearchResponse, limit: usize) {
    let (open, close) = markers();

    println!(
        "{} {}",
        styled(&[BOLD], &format!("{} result(s) for", response.results.len())),
        styled(&[CYAN], &format!("\"{}\"", response.query))
    );

    for (rank, entry) in response.results.iter().take(limit).enumerate() {
        println!();
        println!(
            "{:>3}. {}  {}  {}",
            rank + 1,
            styled(&[BOLD], &entry.title),
            styled(&[score_color(entry.score)], &format!("score {}", entry.score)),
            styled(&[DIM], &format!("({})", entry.id)),
        );
        println!("     {}", highlight(&entry.text, &entry.hits, &open, close));
        println!("     {}", styled(&[DIM], &breakdown(entry)));
    }

    if response.results.len() > limit {
        println!();
        println!(
            "{}",
            styled(&[DIM], &format!("… {} more", response.results.len() - limit))
        );
    }
}

/// Print the extracted searchable text of each page (or just one).
pub fn print_extracted(corpus: &Corpus, only: Option<&str>) {
    for page in corpus.iter().filter(|p| only.map_or(true, |id| p.id == id)) {
        println!("{} {}", styled(&[BOLD], &page.id), styled(&[DIM], &page.title));
        println!("  {}", helpsearch::extract_searchable_text(&page.body));
    }
}
