// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory fuzzy string set: n-gram cosine candidates, Levenshtein re-ranking.
//!
//! Hand it a list of strings, ask for the closest ones to a query. Meant to be
//! embedded for autocomplete, typo-tolerant lookup, and record matching.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ normalize.rs │────▶│   grams.rs   │────▶│   set.rs     │
//! │ (lowercase,  │     │ (padded      │     │ (FuzzySet:   │
//! │  edge strip) │     │  windows)    │     │  add / get)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                             │         │
//!                                             ▼         ▼
//!                                   ┌────────────┐ ┌──────────────────┐
//!                                   │ scoring.rs │ │ fuzzy/levenshtein│
//!                                   │ (cosine)   │ │ (edit distance)  │
//!                                   └────────────┘ └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use gramset::FuzzySet;
//!
//! let mut set = FuzzySet::default();
//! set.add("New York");
//! set.add("Newark");
//!
//! let matches = set.get("new yrok").unwrap();
//! assert_eq!(matches[0].value, "New York");
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod error;
mod fuzzy;
mod grams;
mod normalize;
mod scoring;
mod set;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{
    FuzzySetConfig, DEFAULT_GRAM_SIZE_LOWER, DEFAULT_GRAM_SIZE_UPPER, DEFAULT_MIN_MATCH_SCORE,
    DEFAULT_REFINE_LIMIT,
};
pub use error::{GramsetError, Result};
pub use fuzzy::{levenshtein_distance, levenshtein_similarity, try_similarity};
pub use grams::{gram_count, grams, vector_norm, GramCounts, Grams, PAD_CHAR};
pub use normalize::{is_allowed_char, normalize};
pub use scoring::{cosine_candidates, rank_descending, Scored};
pub use set::FuzzySet;
pub use types::{Entry, GramIndex, GramRecord, GramSizeStats, Match, Posting, SetStats};
