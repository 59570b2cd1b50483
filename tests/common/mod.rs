//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gramset::{FuzzySet, Match};

// Re-export canonical test utilities from gramset::testing
pub use gramset::testing::{sample_set, SAMPLE_CORPUS};

/// Set with default gram sizes (2..=3).
pub fn build_set(words: &[&str], use_levenshtein: bool) -> FuzzySet {
    FuzzySet::new(words.iter().copied(), use_levenshtein, 2, 3)
}

/// Original strings of a result list, in rank order.
pub fn values(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.value.as_str()).collect()
}

/// Assert scores never increase down the list.
pub fn assert_ranked(matches: &[Match]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].value,
            pair[0].score,
            pair[1].value,
            pair[1].score
        );
    }
}
