// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split normalized text into word tokens with character offsets.

/// A maximal run of token characters, with half-open character offsets
/// into the string it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// ASCII letters and digits, plus the German letters `ä ö ü ß`.
///
/// The normalizer already folds umlauts to their base letters, so in practice
/// only `ß` reaches the non-ASCII arm. The umlauts stay in the class so text
/// tokenized without normalization behaves the same way.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'ä' | 'ö' | 'ü' | 'ß')
}

/// Tokenize normalized text, left to right.
///
/// ```
/// use helpsearch::tokenize;
///
/// let tokens = tokenize("die windzone, 2. ordnung");
/// let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(words, ["die", "windzone", "2", "ordnung"]);
/// assert_eq!((tokens[1].start, tokens[1].end), (4, 12));
/// ```
pub fn tokenize(normalized: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut len = 0;

    for (idx, c) in normalized.chars().enumerate() {
        if is_token_char(c) {
            if current.is_empty() {
                start = idx;
            }
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(Token {
                text: std::mem::take(&mut current),
                start,
                end: idx,
            });
        }
        len = idx + 1;
    }

    if !current.is_empty() {
        tokens.push(Token {
            text: current,
            start,
            end: len,
        });
    }

    tokens
}
