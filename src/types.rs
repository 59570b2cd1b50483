// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a fuzzy set.
//!
//! Entries live in an arena keyed by insertion order. Every per-gram-size
//! structure refers back to an entry by that position, so the arena, the
//! record list of each [`GramIndex`], and the catalog all line up.
//!
//! # Invariants
//!
//! - **Records**: `gram_index.records.len() == entries.len()` for every
//!   configured gram size once `add` returns. `records[i]` describes `entries[i]`.
//!
//! - **Postings**: every `Posting { entry, frequency }` has `entry < records.len()`
//!   and `frequency > 0`. A posting list never names the same entry twice.
//!
//! - **Norms**: `records[i].norm > 0`. Every string yields at least one gram,
//!   so no candidate can divide by zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized key and the raw string that first produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub normalized: String,
    pub original: String,
}

/// Per-entry vector data at one gram size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GramRecord {
    /// L2 norm of the entry's gram-count vector.
    pub norm: f64,
    pub normalized: String,
}

/// One slot of a posting list: which entry has the gram, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub entry: usize,
    pub frequency: u32,
}

/// Inverted index for a single gram size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GramIndex {
    pub gram_size: usize,
    /// Indexed by entry position.
    pub records: Vec<GramRecord>,
    /// gram → entries containing it.
    pub postings: HashMap<String, Vec<Posting>>,
}

impl GramIndex {
    pub fn new(gram_size: usize) -> Self {
        Self {
            gram_size,
            records: Vec::new(),
            postings: HashMap::new(),
        }
    }

    /// Total number of postings across all grams.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }
}

/// A ranked query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub score: f64,
    /// The original (un-normalized) string that was inserted.
    pub value: String,
}

impl Match {
    pub fn new(score: f64, value: impl Into<String>) -> Self {
        Self {
            score,
            value: value.into(),
        }
    }
}

/// Size of one gram index, as reported by `FuzzySet::stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GramSizeStats {
    pub gram_size: usize,
    pub distinct_grams: usize,
    pub postings: usize,
}

/// Summary of a fuzzy set's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStats {
    pub entries: usize,
    pub gram_sizes: Vec<GramSizeStats>,
}
