// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gramset command-line interface.
//!
//! Two subcommands: `query` to look strings up in a newline-delimited corpus,
//! and `stats` to see how big the gram indexes get. Flags given on the command
//! line override whatever the `--config` file says.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gramset",
    about = "Fuzzy string lookup with n-gram cosine and Levenshtein scoring",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus comes from and how the set is tuned.
#[derive(Args)]
pub struct SetArgs {
    /// Newline-delimited corpus file (blank lines are skipped)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// JSON config file (see FuzzySetConfig)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Smallest gram size
    #[arg(long)]
    pub lower: Option<usize>,

    /// Largest gram size
    #[arg(long)]
    pub upper: Option<usize>,

    /// Rank by n-gram cosine only
    #[arg(long)]
    pub no_levenshtein: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest corpus entries for each query
    Query {
        #[command(flatten)]
        set: SetArgs,

        /// Minimum score a match needs to be printed
        #[arg(long)]
        min_score: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Strings to look up
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Print entry count and per-gram-size index sizes
    Stats {
        #[command(flatten)]
        set: SetArgs,

        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
}
