// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for a [`FuzzySet`](crate::FuzzySet).
//!
//! Loadable from JSON so the CLI and embedding applications can share one file:
//!
//! ```json
//! { "useLevenshtein": true, "gramSizeLower": 2, "gramSizeUpper": 3, "minMatchScore": 0.33 }
//! ```
//!
//! Missing keys fall back to the defaults below.

use crate::error::{GramsetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_GRAM_SIZE_LOWER: usize = 2;
pub const DEFAULT_GRAM_SIZE_UPPER: usize = 3;
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 0.33;
/// How many cosine candidates survive into Levenshtein re-scoring.
pub const DEFAULT_REFINE_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuzzySetConfig {
    /// Re-score the top cosine candidates by edit distance.
    pub use_levenshtein: bool,
    pub gram_size_lower: usize,
    pub gram_size_upper: usize,
    /// Threshold applied by `get` when the caller doesn't pass one.
    pub min_match_score: f64,
    pub refine_limit: usize,
}

impl Default for FuzzySetConfig {
    fn default() -> Self {
        Self {
            use_levenshtein: true,
            gram_size_lower: DEFAULT_GRAM_SIZE_LOWER,
            gram_size_upper: DEFAULT_GRAM_SIZE_UPPER,
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
            refine_limit: DEFAULT_REFINE_LIMIT,
        }
    }
}

impl FuzzySetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gram_size_lower == 0 {
            return Err(GramsetError::invalid_config("gramSizeLower must be at least 1"));
        }
        if self.gram_size_lower > self.gram_size_upper {
            return Err(GramsetError::invalid_config(format!(
                "gramSizeLower ({}) exceeds gramSizeUpper ({})",
                self.gram_size_lower, self.gram_size_upper
            )));
        }
        if self.refine_limit == 0 {
            return Err(GramsetError::invalid_config("refineLimit must be at least 1"));
        }
        if !self.min_match_score.is_finite() {
            return Err(GramsetError::invalid_config("minMatchScore must be finite"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Configured gram sizes, largest first (the query fallback order).
    pub fn gram_sizes_descending(&self) -> impl Iterator<Item = usize> {
        (self.gram_size_lower..=self.gram_size_upper).rev()
    }
}
