// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for insertion and lookup on arbitrary corpora.

#![no_main]

use arbitrary::Arbitrary;
use gramset::FuzzySet;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SetInput {
    entries: Vec<String>,
    query: String,
    use_levenshtein: bool,
    threshold: u8,
}

fuzz_target!(|input: SetInput| {
    let entries: Vec<String> = input
        .entries
        .iter()
        .take(64)
        .map(|e| e.chars().take(40).collect())
        .collect();
    let query: String = input.query.chars().take(40).collect();
    let threshold = f64::from(input.threshold) / 255.0;

    let set = FuzzySet::new(entries.iter(), input.use_levenshtein, 2, 3);

    if let Some(matches) = set.get_with_threshold(&query, threshold) {
        // INVARIANT 1: ranked, above threshold, bounded by refinement
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(matches.iter().all(|m| m.score >= threshold));
        if input.use_levenshtein {
            assert!(matches.len() <= 50);
        }
    }

    // INVARIANT 2: every entry finds itself
    for entry in set.iter() {
        let matches = set.get_with_threshold(&entry.original, 0.0).expect("self overlap");
        assert!(matches.iter().any(|m| m.value == entry.original));
    }
});
