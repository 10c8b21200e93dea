// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the helpsearch command-line interface.
//!
//! Two subcommands: `search` to query a corpus file and `extract` to see the
//! plain text the matcher actually works on. The latter is mostly for
//! debugging why a page does or does not match.

pub mod display;

use clap::{Parser, Subcommand};
use helpsearch::DEFAULT_SCORE_CEILING;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "helpsearch",
    about = "Fuzzy search over help pages",
    version
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// Path to corpus JSON (array of {id, title, body})
        corpus: PathBuf,

        /// Search query (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Path to synonyms JSON (object of term → [alternatives])
        #[arg(short, long)]
        synonyms: Option<PathBuf>,

        /// Highest score still returned
        #[arg(long, default_value_t = DEFAULT_SCORE_CEILING)]
        ceiling: u32,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the full response as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the searchable text extracted from each page body
    Extract {
        /// Path to corpus JSON
        corpus: PathBuf,

        /// Only show the page with this id
        #[arg(long)]
        id: Option<String>,
    },
}
