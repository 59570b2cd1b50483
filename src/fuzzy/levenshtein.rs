// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity derived from it.
//!
//! Cosine over grams ignores where grams sit in the string, so `"abcd"` and
//! `"cdab"` look closer than they are. Re-scoring the top candidates with
//! `1 - distance / max_len` fixes the order without paying the O(nm) DP for
//! every entry in the set.
//!
//! Lengths are `char` counts, never byte lengths.

use crate::error::{GramsetError, Result};

/// Levenshtein distance with a single rolling row.
///
/// The row spans the shorter string, so memory is O(min(|a|, |b|)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();

    let mut dp: Vec<usize> = (0..=short_len).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, sc) in short.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(lc != sc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[short_len]
}

/// `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical and score `1.0`.
///
/// ```
/// use gramset::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("ring", "ring"), 1.0);
/// assert_eq!(levenshtein_similarity("abcd", "abce"), 0.75);
/// assert_eq!(levenshtein_similarity("", "abc"), 0.0);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Similarity for callers that may hold absent strings.
///
/// One side absent scores `0.0`. Both absent is a contract violation and
/// returns [`GramsetError::InvalidComparison`].
pub fn try_similarity(a: Option<&str>, b: Option<&str>) -> Result<f64> {
    match (a, b) {
        (None, None) => Err(GramsetError::InvalidComparison),
        (Some(_), None) | (None, Some(_)) => Ok(0.0),
        (Some(a), Some(b)) => Ok(levenshtein_similarity(a, b)),
    }
}
