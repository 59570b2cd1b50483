// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization and gram extraction.
//!
//! Normalization must be idempotent on arbitrary Unicode, and every string
//! must yield at least one gram of exactly the requested width.

#![no_main]

use arbitrary::Arbitrary;
use gramset::{gram_count, grams, normalize, vector_norm};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct GramInput {
    text: String,
    gram_size: u8,
}

fuzz_target!(|input: GramInput| {
    let text: String = input.text.chars().take(200).collect();
    let gram_size = usize::from(input.gram_size % 8) + 1;

    let normalized = normalize(&text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&normalized), normalized);

    // INVARIANT 2: at least one gram, all of width gram_size
    let all: Vec<String> = grams(&normalized, gram_size).collect();
    assert!(!all.is_empty(), "no grams for {:?}", normalized);
    for g in &all {
        assert_eq!(g.chars().count(), gram_size);
    }

    // INVARIANT 3: tally matches sequence, norm is positive
    let counts = gram_count(&normalized, gram_size);
    assert_eq!(counts.values().map(|&c| c as usize).sum::<usize>(), all.len());
    assert!(vector_norm(&counts) > 0.0);
});
