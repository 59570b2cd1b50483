// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the fuzzy set.
//!
//! Debug-mode assertions over the invariants documented in `types`. They
//! compile to nothing in release builds.
//!
//! | Contract Function          | Invariant                                    |
//! |----------------------------|----------------------------------------------|
//! | `check_records_aligned`    | every gram index has one record per entry    |
//! | `check_entry_postings`     | a new entry's postings are valid and unique  |
//! | `check_ranked`             | scores are non-increasing                    |
//! | `check_threshold_applied`  | no result falls below the threshold          |

use crate::scoring::Scored;
use crate::types::{GramIndex, Match};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Every configured gram size holds exactly one record per entry.
///
/// # Panics (debug builds only)
/// Panics if any record list is out of step with the entry arena.
#[inline]
pub fn check_records_aligned(entry_count: usize, indexes: &[GramIndex]) {
    for index in indexes {
        debug_assert_eq!(
            index.records.len(),
            entry_count,
            "Contract violation: gram size {} has {} records for {} entries",
            index.gram_size,
            index.records.len(),
            entry_count
        );
    }
}

/// The postings written for `entry` point at it once each, with nonzero frequency.
///
/// Only the lists for `grams` (the entry's own grams) are visited, and only
/// their tails, since an entry's postings are always the most recent append.
///
/// # Panics (debug builds only)
/// Panics if a gram has no list, or the entry's tail posting is missing,
/// repeated, or zero-frequency.
#[inline]
pub fn check_entry_postings<'a, I>(index: &GramIndex, entry: usize, grams: I)
where
    I: IntoIterator<Item = &'a String>,
{
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert!(
        entry < index.records.len(),
        "Contract violation: entry {} >= records.len() {} at gram size {}",
        entry,
        index.records.len(),
        index.gram_size
    );

    for gram in grams {
        let Some(postings) = index.postings.get(gram) else {
            panic!(
                "Contract violation: no posting list for '{}' at gram size {}",
                gram, index.gram_size
            );
        };
        debug_assert!(
            postings.last().is_some_and(|p| p.entry == entry),
            "Contract violation: entry {} missing from the tail of '{}'",
            entry,
            gram
        );
        let mine = postings.iter().rev().take_while(|p| p.entry == entry);
        let mut seen = 0usize;
        for posting in mine {
            seen += 1;
            debug_assert!(
                posting.frequency > 0,
                "Contract violation: zero-frequency posting for '{}' at gram size {}",
                gram,
                index.gram_size
            );
        }
        debug_assert!(
            seen <= 1,
            "Contract violation: entry {} posted {} times under '{}'",
            entry,
            seen,
            gram
        );
    }
}

// ============================================================================
// QUERY CONTRACTS
// ============================================================================

/// Scores are sorted non-increasing.
#[inline]
pub fn check_ranked(scored: &[Scored]) {
    for i in 1..scored.len() {
        debug_assert!(
            scored[i - 1].score >= scored[i].score || scored[i].score.is_nan(),
            "Contract violation: ranked[{}] = {} < ranked[{}] = {}",
            i - 1,
            scored[i - 1].score,
            i,
            scored[i].score
        );
    }
}

#[inline]
pub fn check_threshold_applied(results: &[Match], min_match_score: f64) {
    for (i, m) in results.iter().enumerate() {
        debug_assert!(
            m.score >= min_match_score,
            "Contract violation: result[{}] '{}' scored {} below threshold {}",
            i,
            m.value,
            m.score,
            min_match_score
        );
    }
}
