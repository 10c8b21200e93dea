// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for body markup extraction.
//!
//! Help bodies are hand-written and often broken: unclosed tags, stray
//! brackets, half an entity. Extraction has no error path, so it must
//! always produce clean text.

#![no_main]

use helpsearch::{extract_searchable_text, normalize, NormalizedText};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let raw: String = raw.chars().take(2000).collect();

    // INVARIANT 1: extraction never panics
    let text = extract_searchable_text(&raw);

    // INVARIANT 2: output is trimmed with no whitespace runs
    assert_eq!(text.trim(), text, "untrimmed output for {:?}", raw);
    assert!(
        !text.split(' ').any(str::is_empty) || text.is_empty(),
        "whitespace run in output for {:?}",
        raw
    );

    // INVARIANT 3: extraction is idempotent on its own tag-free output
    if !text.contains(['<', '[', '&']) {
        assert_eq!(extract_searchable_text(&text), text);
    }

    // INVARIANT 4: every normalized offset maps back inside the source
    let normalized = NormalizedText::new(&text);
    assert_eq!(normalized.as_str(), normalize(&text));
    let source_len = text.chars().count();
    let len = normalized.char_len();
    if len > 0 {
        let (start, end) = normalized.to_source_span(0, len);
        assert!(start <= end && end <= source_len);
    }
});
