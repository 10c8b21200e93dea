// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use helpsearch::{load_corpus, load_synonyms, search, SearchOptions, SynonymTable};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            query,
            synonyms,
            ceiling,
            limit,
            json,
        } => {
            let corpus = load_corpus(&corpus)
                .with_context(|| format!("loading corpus {}", corpus.display()))?;
            let synonyms = match synonyms {
                Some(path) => load_synonyms(&path)
                    .with_context(|| format!("loading synonyms {}", path.display()))?,
                None => SynonymTable::new(),
            };
            let options = SearchOptions::with_score_ceiling(ceiling);

            let response = search(&query.join(" "), &corpus, &synonyms, &options);

            if json {
                let out = serde_json::to_string_pretty(&response)
                    .context("serializing search response")?;
                println!("{}", out);
            } else {
                display::print_results(&response, limit);
            }
        }
        Commands::Extract { corpus, id } => {
            let corpus = load_corpus(&corpus)
                .with_context(|| format!("loading corpus {}", corpus.display()))?;
            if let Some(id) = id.as_deref() {
                if corpus.get(id).is_none() {
                    anyhow::bail!("no page with id {:?}", id);
                }
            }
            display::print_extracted(&corpus, id.as_deref());
        }
    }
    Ok(())
}
