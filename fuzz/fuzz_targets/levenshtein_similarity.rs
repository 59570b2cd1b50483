// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and the similarity derived from it.

#![no_main]

use arbitrary::Arbitrary;
use gramset::{levenshtein_distance, levenshtein_similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let d = levenshtein_distance(&a, &b);
    let (la, lb) = (a.chars().count(), b.chars().count());

    // INVARIANT 1: |len(a) - len(b)| <= d <= max(len(a), len(b))
    assert!(la.abs_diff(lb) <= d);
    assert!(d <= la.max(lb));

    // INVARIANT 2: symmetric, bounded
    let s = levenshtein_similarity(&a, &b);
    assert_eq!(s, levenshtein_similarity(&b, &a));
    assert!((0.0..=1.0).contains(&s));

    // INVARIANT 3: identity
    assert_eq!(levenshtein_distance(&a, &a), 0);
    assert_eq!(levenshtein_similarity(&a, &a), 1.0);
});
