//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::scan::ScanOptions;
use crate::core::render::render_stats;
use crate::core::util::{Reporter, Verbosity};
use crate::flows::aggregate::AggregatorConfig;
use crate::flows::pipeline::{self, OutputPaths, PipelineConfig};

/// ngrams - word, character and n-gram frequencies for a tree of text documents.
#[derive(Parser, Debug)]
#[command(name = "ngrams")]
#[command(
    author,
    version,
    about,
    long_about = r#"ngrams walks INPUT_DIR depth-first (entries sorted by name), reads every
*.txt document line by line, and splits lines into lowercase words made of
ASCII letters.

It writes five tab-delimited files:
- WORDS_OUT: every word in reading order, one per line (stop words included)
- CHARS_OUT: 26 lines of `letter<TAB>count`
- UNIGRAMS_OUT / BIGRAMS_OUT / TRIGRAMS_OUT: `words<TAB>count`, sorted by key

Stop words never take part in n-grams. The two-word window used for bigrams
and trigrams carries over from one document to the next unless
--reset-window-per-document is given.

Example:
    ngrams corpus/ words.txt chars.txt unigrams.txt bigrams.txt trigrams.txt
"#
)]
pub struct Cli {
    /// Directory to scan for documents.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output file for the full word list.
    #[arg(value_name = "WORDS_OUT")]
    pub words_out: PathBuf,

    /// Output file for per-letter character counts.
    #[arg(value_name = "CHARS_OUT")]
    pub chars_out: PathBuf,

    /// Output file for unigram frequencies.
    #[arg(value_name = "UNIGRAMS_OUT")]
    pub unigrams_out: PathBuf,

    /// Output file for bigram frequencies.
    #[arg(value_name = "BIGRAMS_OUT")]
    pub bigrams_out: PathBuf,

    /// Output file for trigram frequencies.
    #[arg(value_name = "TRIGRAMS_OUT")]
    pub trigrams_out: PathBuf,

    /// Document file extension (without the dot).
    #[arg(
        long = "ext",
        default_value = "txt",
        value_name = "EXT",
        long_help = "Only files whose name ends with .EXT are read.\n\n\
Defaults to txt."
    )]
    pub extension: String,

    /// Maximum number of documents to read.
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        long_help = "Stop collecting documents after N files (in traversal order).\n\n\
If omitted, every matching file is read."
    )]
    pub max_files: Option<u64>,

    /// Start a fresh n-gram window for every document.
    #[arg(
        long,
        long_help = "By default the last two accepted words of one document combine with the\n\
first words of the next, so bigrams and trigrams can span a document boundary.\n\
With this flag the window is cleared at the start of every document."
    )]
    pub reset_window_per_document: bool,

    /// Let stop words take part in n-grams.
    #[arg(long)]
    pub keep_stop_words: bool,

    /// Print run statistics as JSON on stdout.
    #[arg(long)]
    pub stats: bool,

    /// Pretty-print the --stats JSON with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no status output).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (report every document).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the pipeline configuration from parsed arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input_dir: self.input_dir.clone(),
            outputs: OutputPaths {
                words: self.words_out.clone(),
                char_counts: self.chars_out.clone(),
                unigrams: self.unigrams_out.clone(),
                bigrams: self.bigrams_out.clone(),
                trigrams: self.trigrams_out.clone(),
            },
            scan: ScanOptions {
                extension: self.extension.trim_start_matches('.').to_string(),
                max_files: self.max_files.map(|n| n as usize),
            },
            aggregator: AggregatorConfig {
                reset_window_per_document: self.reset_window_per_document,
            },
            keep_stop_words: self.keep_stop_words,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let reporter = Reporter::new(Verbosity::from_flags(cli.quiet, cli.verbose), !cli.no_color);
    let config = cli.pipeline_config();

    let stats = pipeline::run(&config, &reporter).with_context(|| {
        format!(
            "Program terminated while processing {}",
            config.input_dir.display()
        )
    })?;

    if cli.stats {
        println!("{}", render_stats(&stats, cli.pretty));
    }

    Ok(())
}
