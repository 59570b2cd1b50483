// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy refinement: edit-distance re-scoring of cosine candidates.

mod levenshtein;

pub use levenshtein::*;
