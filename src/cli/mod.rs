// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the morsel command-line interface.
//!
//! Three subcommands: `rank` to list subwords by score, `factor` to break
//! words into repeated pieces, and `inspect` to examine the automaton that
//! serves both. Every subcommand accepts the same input sources: positional
//! words or `--input` with a one-word-per-line file.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "morsel",
    about = "Subword statistics and greedy piece factorization",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Alphabet restriction applied at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    /// Accept any character.
    Any,
    /// ASCII graphic characters and space.
    Ascii,
    /// Lowercase ASCII letters only.
    Lowercase,
}

/// Input options shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Words forming the collection
    pub words: Vec<String>,

    /// Read the collection from a file instead (one word per line,
    /// `#` comments skipped)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Skip normalization (lowercase + diacritic folding)
    #[arg(long)]
    pub raw: bool,

    /// Alphabet the words must stay inside
    #[arg(long, value_enum, default_value = "any")]
    pub alphabet: AlphabetArg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank distinct subwords by length x occurrences
    Rank {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of entries to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Factor each word into maximal repeated pieces
    Factor {
        #[command(flatten)]
        input: InputArgs,

        /// Refuse words with no true factorization instead of falling
        /// back to single characters
        #[arg(long)]
        strict: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show automaton statistics and verify its invariants
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
