// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::Path;

use gramset::{FuzzySet, FuzzySetConfig};

mod cli;
use cli::display::{format_matches, format_stats};
use cli::{Cli, Commands, SetArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Query {
            set,
            min_score,
            json,
            queries,
        } => {
            let fuzzy = build_set(&set)?;
            let threshold = min_score.unwrap_or(fuzzy.config().min_match_score);

            let mut report = Vec::with_capacity(queries.len());
            for query in &queries {
                let matches = fuzzy.get_with_threshold(query, threshold);
                if json {
                    report.push(serde_json::json!({ "query": query, "matches": matches }));
                } else {
                    print!("{}", format_matches(query, matches.as_deref()));
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Stats { set, json } => {
            let fuzzy = build_set(&set)?;
            let stats = fuzzy.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", format_stats(&stats));
            }
        }
    }

    Ok(())
}

/// Resolve the config (file, then flags) and load the corpus into a set.
fn build_set(args: &SetArgs) -> Result<FuzzySet> {
    let mut config = match &args.config {
        Some(path) => FuzzySetConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FuzzySetConfig::default(),
    };
    if let Some(lower) = args.lower {
        config.gram_size_lower = lower;
    }
    if let Some(upper) = args.upper {
        config.gram_size_upper = upper;
    }
    if args.no_levenshtein {
        config.use_levenshtein = false;
    }

    let mut set = FuzzySet::with_config(config)?;
    set.extend(load_corpus(&args.corpus)?);
    info!(
        "loaded {} entries from {}",
        set.len(),
        args.corpus.display()
    );
    Ok(set)
}

/// Non-blank lines of a corpus file, trailing `\r` removed.
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
