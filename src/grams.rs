// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sliding-window gram extraction.
//!
//! A normalized string is wrapped in `-` markers before slicing, so `"ab"` at
//! size 2 yields `-a`, `ab`, `b-`. When the padded string is still shorter
//! than the window, it's right-padded with more markers until exactly one gram
//! fits. Every input, including the empty string, produces at least one gram.
//!
//! Windows are measured in `char`s, not bytes, so multi-byte letters count once.

use std::collections::HashMap;

/// Boundary marker wrapped around every string before extraction.
pub const PAD_CHAR: char = '-';

/// Term-frequency vector: gram → occurrences.
pub type GramCounts = HashMap<String, u32>;

/// Lazy iterator over the grams of one string at one window size.
///
/// Cheap to recreate; holds no shared state.
#[derive(Debug, Clone)]
pub struct Grams {
    chars: Vec<char>,
    size: usize,
    pos: usize,
}

impl Iterator for Grams {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let end = self.pos + self.size;
        if end > self.chars.len() {
            return None;
        }
        let gram = self.chars[self.pos..end].iter().collect();
        self.pos += 1;
        Some(gram)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.chars.len() + 1).saturating_sub(self.pos + self.size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Grams {}

/// All grams of `normalized` at window `gram_size`, left to right.
///
/// # Panics
///
/// Panics if `gram_size` is zero.
///
/// ```
/// use gramset::grams;
///
/// let all: Vec<String> = grams("ab", 2).collect();
/// assert_eq!(all, ["-a", "ab", "b-"]);
///
/// // Short input gets right-padded up to the window.
/// let short: Vec<String> = grams("", 3).collect();
/// assert_eq!(short, ["---"]);
/// ```
pub fn grams(normalized: &str, gram_size: usize) -> Grams {
    assert!(gram_size >= 1, "gram size must be at least 1");

    let mut chars: Vec<char> = Vec::with_capacity(normalized.len() + 2);
    chars.push(PAD_CHAR);
    chars.extend(normalized.chars());
    chars.push(PAD_CHAR);
    while chars.len() < gram_size {
        chars.push(PAD_CHAR);
    }

    Grams {
        chars,
        size: gram_size,
        pos: 0,
    }
}

/// Tally of [`grams`], counting repeats.
pub fn gram_count(normalized: &str, gram_size: usize) -> GramCounts {
    let mut counts = GramCounts::new();
    for gram in grams(normalized, gram_size) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// L2 norm of a term-frequency vector.
pub fn vector_norm(counts: &GramCounts) -> f64 {
    counts
        .values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}
