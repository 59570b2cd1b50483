// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy set: insertion and nearest-match lookup.
//!
//! # Pipeline
//!
//! ```text
//! add:  raw ─▶ normalize ─▶ gram_count (each size) ─▶ records + postings ─▶ catalog
//!
//! get:  query ─▶ normalize ─▶ largest gram size ─┬─ hits? ─▶ cosine ranking
//!                                 ▲               │              │
//!                                 └── next size ◀─┘ (no hits)    ▼
//!                                           levenshtein top-K (optional)
//!                                                                │
//!                                                      threshold ─▶ originals
//! ```
//!
//! Larger grams are more selective, so they go first. We only fall back to a
//! smaller size when the larger one shares nothing at all with the set.
//!
//! Insertion is append-only. There's no removal, and a duplicate normalized
//! key is a silent no-op (first insertion keeps its original string).
//!
//! Mutation needs `&mut self`; wrap the set in a lock if several threads add.

use crate::config::FuzzySetConfig;
use crate::contracts::{
    check_entry_postings, check_ranked, check_records_aligned, check_threshold_applied,
};
use crate::error::Result;
use crate::fuzzy::levenshtein_similarity;
use crate::grams::{gram_count, vector_norm};
use crate::normalize::normalize;
use crate::scoring::{cosine_candidates, rank_descending, Scored};
use crate::types::{Entry, GramIndex, GramRecord, GramSizeStats, Match, Posting, SetStats};
use log::{debug, trace};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FuzzySet {
    config: FuzzySetConfig,
    /// Insertion-ordered arena; position is the join key for every gram index.
    entries: Vec<Entry>,
    /// normalized → position in `entries`.
    catalog: HashMap<String, usize>,
    /// One per gram size, ascending from `gram_size_lower`.
    indexes: Vec<GramIndex>,
}

impl FuzzySet {
    /// Build a set from initial entries.
    ///
    /// # Panics
    ///
    /// Panics if `gram_size_lower` is zero or greater than `gram_size_upper`.
    /// Use [`FuzzySet::with_config`] to get an error instead.
    ///
    /// ```
    /// use gramset::FuzzySet;
    ///
    /// let set = FuzzySet::new(["Lord of the Rings", "Rings of Power"], true, 2, 3);
    /// let matches = set.get("rings of powr").unwrap();
    /// assert_eq!(matches[0].value, "Rings of Power");
    /// ```
    pub fn new<I, S>(
        initial: I,
        use_levenshtein: bool,
        gram_size_lower: usize,
        gram_size_upper: usize,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assert!(
            gram_size_lower >= 1 && gram_size_lower <= gram_size_upper,
            "gram size range {}..={} is invalid",
            gram_size_lower,
            gram_size_upper
        );
        let config = FuzzySetConfig {
            use_levenshtein,
            gram_size_lower,
            gram_size_upper,
            ..FuzzySetConfig::default()
        };
        let mut set = Self::from_valid_config(config);
        set.extend(initial);
        set
    }

    /// Empty set with a validated configuration.
    pub fn with_config(config: FuzzySetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FuzzySetConfig) -> Self {
        let indexes = (config.gram_size_lower..=config.gram_size_upper)
            .map(GramIndex::new)
            .collect();
        Self {
            config,
            entries: Vec::new(),
            catalog: HashMap::new(),
            indexes,
        }
    }

    pub fn config(&self) -> &FuzzySetConfig {
        &self.config
    }

    // ========================================================================
    // INSERTION
    // ========================================================================

    /// Insert `raw`. A no-op if its normalized form is already present.
    pub fn add(&mut self, raw: &str) {
        let normalized = normalize(raw);
        if self.catalog.contains_key(&normalized) {
            debug!("skipping duplicate entry {:?} (normalized {:?})", raw, normalized);
            return;
        }

        let entry = self.entries.len();
        for index in &mut self.indexes {
            let counts = gram_count(&normalized, index.gram_size);
            debug_assert_eq!(index.records.len(), entry);
            index.records.push(GramRecord {
                norm: vector_norm(&counts),
                normalized: normalized.clone(),
            });
            for (gram, &frequency) in &counts {
                index
                    .postings
                    .entry(gram.clone())
                    .or_default()
                    .push(Posting { entry, frequency });
            }
            check_entry_postings(index, entry, counts.keys());
        }

        debug!("added entry #{} {:?}", entry, normalized);
        self.catalog.insert(normalized.clone(), entry);
        self.entries.push(Entry {
            normalized,
            original: raw.to_string(),
        });
        check_records_aligned(self.entries.len(), &self.indexes);
    }

    // ========================================================================
    // QUERY
    // ========================================================================

    /// Closest matches using the configured threshold.
    ///
    /// `None` means nothing shared a gram with the query at any size.
    /// `Some(vec![])` means candidates existed but none cleared the threshold.
    pub fn get(&self, query: &str) -> Option<Vec<Match>> {
        self.get_with_threshold(query, self.config.min_match_score)
    }

    /// Closest matches scoring at least `min_match_score`.
    pub fn get_with_threshold(&self, query: &str, min_match_score: f64) -> Option<Vec<Match>> {
        let normalized = normalize(query);

        let mut found = None;
        for gram_size in self.config.gram_sizes_descending() {
            let scored = self.cosine_at(&normalized, gram_size);
            if scored.is_empty() {
                trace!("no overlap at gram size {} for {:?}", gram_size, normalized);
                continue;
            }
            found = Some((gram_size, scored));
            break;
        }

        let Some((gram_size, scored)) = found else {
            debug!("no match for {:?}", normalized);
            return None;
        };
        Some(self.finish(&normalized, gram_size, scored, min_match_score))
    }

    /// Like [`get_with_threshold`](Self::get_with_threshold), but `default`
    /// stands in for "no match".
    ///
    /// Only a query with no gram overlap at any size yields `default`. When
    /// candidates exist but none reaches `min_match_score`, the empty result
    /// is returned as-is, not replaced, even though a reading of "no match" as
    /// "nothing cleared the threshold" would substitute it. Callers who want
    /// the default in that case too should test `is_empty()` themselves.
    pub fn get_or(&self, query: &str, default: Vec<Match>, min_match_score: f64) -> Vec<Match> {
        self.get_with_threshold(query, min_match_score).unwrap_or(default)
    }

    /// Run the query at exactly one gram size, with no fallback.
    ///
    /// Returns `None` for sizes outside the configured range.
    pub fn get_at_gram_size(
        &self,
        query: &str,
        gram_size: usize,
        min_match_score: f64,
    ) -> Option<Vec<Match>> {
        let normalized = normalize(query);
        let scored = self.cosine_at(&normalized, gram_size);
        if scored.is_empty() {
            return None;
        }
        Some(self.finish(&normalized, gram_size, scored, min_match_score))
    }

    fn gram_index(&self, gram_size: usize) -> Option<&GramIndex> {
        let offset = gram_size.checked_sub(self.config.gram_size_lower)?;
        self.indexes.get(offset)
    }

    fn cosine_at(&self, normalized: &str, gram_size: usize) -> Vec<Scored> {
        let Some(index) = self.gram_index(gram_size) else {
            return Vec::new();
        };
        let counts = gram_count(normalized, gram_size);
        cosine_candidates(index, &counts, vector_norm(&counts))
    }

    /// Rank, optionally re-score by edit distance, threshold, and map back to originals.
    fn finish(
        &self,
        normalized: &str,
        gram_size: usize,
        mut scored: Vec<Scored>,
        min_match_score: f64,
    ) -> Vec<Match> {
        let candidates = scored.len();
        rank_descending(&mut scored);

        if self.config.use_levenshtein {
            scored.truncate(self.config.refine_limit);
            for s in &mut scored {
                s.score = levenshtein_similarity(normalized, &self.entries[s.entry].normalized);
            }
            rank_descending(&mut scored);
        }
        check_ranked(&scored);

        let results: Vec<Match> = scored
            .into_iter()
            .filter(|s| s.score >= min_match_score)
            .map(|s| Match::new(s.score, self.entries[s.entry].original.clone()))
            .collect();
        check_threshold_applied(&results, min_match_score);

        debug!(
            "query {:?}: gram size {}, {} candidates, {} above {}",
            normalized,
            gram_size,
            candidates,
            results.len(),
            min_match_score
        );
        results
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Number of distinct normalized entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original strings in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.original.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Exact membership, after normalization.
    pub fn contains(&self, value: &str) -> bool {
        self.catalog.contains_key(&normalize(value))
    }

    pub fn stats(&self) -> SetStats {
        SetStats {
            entries: self.entries.len(),
            gram_sizes: self
                .indexes
                .iter()
                .map(|index| GramSizeStats {
                    gram_size: index.gram_size,
                    distinct_grams: index.postings.len(),
                    postings: index.posting_count(),
                })
                .collect(),
        }
    }
}

impl Default for FuzzySet {
    fn default() -> Self {
        Self::from_valid_config(FuzzySetConfig::default())
    }
}

impl<S: AsRef<str>> Extend<S> for FuzzySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FuzzySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a FuzzySet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
