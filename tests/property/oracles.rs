//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that the optimized code is
//! checked against: a full pairwise cosine scan instead of posting lists,
//! and a full-matrix edit distance instead of the rolling row.

#![allow(dead_code)]

use gramset::{gram_count, normalize};

/// Cosine of two strings' gram vectors at one size, by direct comparison.
pub fn oracle_cosine(a: &str, b: &str, gram_size: usize) -> f64 {
    let va = gram_count(a, gram_size);
    let vb = gram_count(b, gram_size);
    let dot: f64 = va
        .iter()
        .filter_map(|(g, &fa)| vb.get(g).map(|&fb| f64::from(fa) * f64::from(fb)))
        .sum();
    let na: f64 = va.values().map(|&f| f64::from(f).powi(2)).sum::<f64>().sqrt();
    let nb: f64 = vb.values().map(|&f| f64::from(f).powi(2)).sum::<f64>().sqrt();
    dot / (na * nb)
}

/// Every distinct normalized entry with a nonzero cosine against the query.
pub fn oracle_candidates(corpus: &[String], query: &str, gram_size: usize) -> Vec<(String, f64)> {
    let q = normalize(query);
    let mut seen = std::collections::HashSet::new();
    corpus
        .iter()
        .map(|raw| normalize(raw))
        .filter(|n| seen.insert(n.clone()))
        .map(|n| {
            let score = oracle_cosine(&q, &n, gram_size);
            (n, score)
        })
        .filter(|(_, score)| *score > 0.0)
        .collect()
}

/// Full (n+1)×(m+1) Wagner-Fischer table.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    table[a.len()][b.len()]
}
