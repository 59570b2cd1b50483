// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::set::FuzzySet;

/// A small mixed corpus: titles, place names, accented and Arabic words.
pub const SAMPLE_CORPUS: &[&str] = &[
    "Lord of the Rings",
    "Rings of Power",
    "The Hobbit",
    "The Silmarillion",
    "Unfinished Tales",
    "New York",
    "New Jersey",
    "Newark",
    "York",
    "Yorkshire",
    "Café Crème",
    "Crème Brûlée",
    "كتاب",
    "مكتبة",
    "apple",
    "orange",
    "pineapple",
];

/// Set over [`SAMPLE_CORPUS`] with default gram sizes.
pub fn sample_set(use_levenshtein: bool) -> FuzzySet {
    FuzzySet::new(SAMPLE_CORPUS.iter().copied(), use_levenshtein, 2, 3)
}

/// Deterministic pseudo-word corpus for benches: `count` words built from a
/// fixed syllable table.
pub fn synthetic_words(count: usize) -> Vec<String> {
    const SYLLABLES: &[&str] = &[
        "ka", "lo", "mi", "ren", "ta", "vor", "sel", "an", "du", "qui", "zo", "pe", "nith", "ar",
    ];
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i + 1;
            while n > 0 {
                word.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
            }
            word
        })
        .collect()
}
