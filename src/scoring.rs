// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine similarity over posting lists.
//!
//! Only entries that share at least one gram with the query are touched:
//! walk the query's grams, pull each posting list, and accumulate
//! `query_freq * entry_freq` per entry. Cost scales with how selective the
//! query grams are, not with the size of the set.

use crate::grams::GramCounts;
use crate::types::GramIndex;
use std::cmp::Ordering;
use std::collections::HashMap;

/// An entry position with its current score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub entry: usize,
    pub score: f64,
}

/// Cosine similarity of the query against every entry sharing a gram with it.
///
/// Returns an empty vector when no posting list is hit. Order is unspecified;
/// pass the result through [`rank_descending`].
pub fn cosine_candidates(index: &GramIndex, query: &GramCounts, query_norm: f64) -> Vec<Scored> {
    let mut dots: HashMap<usize, u64> = HashMap::new();

    for (gram, &query_freq) in query {
        let Some(postings) = index.postings.get(gram) else {
            continue;
        };
        for posting in postings {
            *dots.entry(posting.entry).or_insert(0) +=
                u64::from(query_freq) * u64::from(posting.frequency);
        }
    }

    dots.into_iter()
        .map(|(entry, dot)| Scored {
            entry,
            score: dot as f64 / (query_norm * index.records[entry].norm),
        })
        .collect()
}

/// Sort by score descending; ties go to the earlier-inserted entry.
pub fn rank_descending(scored: &mut [Scored]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.entry.cmp(&b.entry))
    });
}
