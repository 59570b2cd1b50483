// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering for CLI output.
//!
//! Tab-separated so it pipes cleanly into `cut`/`sort`.

use gramset::{Match, SetStats};

pub fn format_matches(query: &str, matches: Option<&[Match]>) -> String {
    let mut out = format!("# {}\n", query);
    match matches {
        None => out.push_str("no match\n"),
        Some([]) => out.push_str("no match above threshold\n"),
        Some(matches) => {
            for m in matches {
                out.push_str(&format!("{:.4}\t{}\n", m.score, m.value));
            }
        }
    }
    out
}

pub fn format_stats(stats: &SetStats) -> String {
    let mut out = format!("entries\t{}\n", stats.entries);
    out.push_str("gram_size\tdistinct_grams\tpostings\n");
    for g in &stats.gram_sizes {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            g.gram_size, g.distinct_grams, g.postings
        ));
    }
    out
}
