//! ngrams - Word, character and n-gram frequency statistics for a text corpus
//!
//! ngrams provides:
//! - Deterministic recursive document discovery
//! - ASCII word tokenization with a fixed stop-word list
//! - Unigram, bigram and trigram tables over a cross-document sliding window
//! - Flat tab-delimited output files

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
