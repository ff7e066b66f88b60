//! Corpus pipeline - Drives a full pass over the input directory
//!
//! Documents are read in scan order, line by line. Every token goes to the
//! word-list file and to the aggregator. The character counts and the three
//! n-gram tables are written only after the whole corpus has been read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backends::scan::{collect_documents, ScanOptions};
use crate::core::error::{NgramError, Result};
use crate::core::model::{NgramOrder, RunStats};
use crate::core::paths::display_path;
use crate::core::render::{write_char_counts, write_table, write_word};
use crate::core::stopwords::StopWordSet;
use crate::core::tokenizer::tokens;
use crate::core::util::Reporter;
use crate::flows::aggregate::{Aggregator, AggregatorConfig};

/// Destination files, one per output kind
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub words: PathBuf,
    pub char_counts: PathBuf,
    pub unigrams: PathBuf,
    pub bigrams: PathBuf,
    pub trigrams: PathBuf,
}

impl OutputPaths {
    fn for_order(&self, order: NgramOrder) -> &Path {
        match order {
            NgramOrder::Unigram => &self.unigrams,
            NgramOrder::Bigram => &self.bigrams,
            NgramOrder::Trigram => &self.trigrams,
        }
    }
}

/// Everything a run needs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub outputs: OutputPaths,
    pub scan: ScanOptions,
    pub aggregator: AggregatorConfig,
    /// Let stop words into the n-gram window
    pub keep_stop_words: bool,
}

/// Open an output file for buffered writing
fn create_output(path: &Path, what: &'static str) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| NgramError::OutputOpen {
            path: path.to_path_buf(),
            what,
            source,
        })
}

/// Write a whole output file through `render`, then flush it
fn write_output<F>(path: &Path, what: &'static str, reporter: &Reporter, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut writer = create_output(path, what)?;
    reporter.detail(format!("{} opened for writing {}", path.display(), what));
    render(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|source| NgramError::OutputWrite {
            path: path.to_path_buf(),
            what,
            source,
        })?;
    reporter.done(format!("{} written to {}", what, path.display()));
    Ok(())
}

/// Read one document, streaming its tokens to the word list and the aggregator
fn process_document<W: Write>(
    path: &Path,
    aggregator: &mut Aggregator,
    words: &mut W,
    words_path: &Path,
) -> Result<()> {
    let read_err = |source: std::io::Error| NgramError::InputRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = BufReader::new(File::open(path).map_err(read_err)?);
    let mut buf = Vec::new();

    aggregator.begin_document();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
            break;
        }
        // Only ASCII letters form tokens, so undecodable bytes act as separators
        let line = String::from_utf8_lossy(&buf);
        aggregator.count_line();
        for token in tokens(&line) {
            write_word(words, &token).map_err(|source| NgramError::OutputWrite {
                path: words_path.to_path_buf(),
                what: "words",
                source,
            })?;
            aggregator.observe(&token);
        }
    }
    Ok(())
}

/// Run the pipeline end to end
pub fn run(config: &PipelineConfig, reporter: &Reporter) -> Result<RunStats> {
    let input_dir = &config.input_dir;
    let outputs = &config.outputs;
    reporter.status(format!(
        "Input files directory path name is: {}",
        input_dir.display()
    ));

    let documents = collect_documents(input_dir, &config.scan)?;
    if documents.is_empty() {
        reporter.warn(format!(
            "no .{} files found under {}",
            config.scan.extension,
            input_dir.display()
        ));
    }
    if documents.capped {
        reporter.warn(format!(
            "document limit reached, only the first {} files are processed",
            documents.len()
        ));
    }

    let mut words = create_output(&outputs.words, "words")?;
    reporter.status(format!(
        "{} successfully opened for writing words",
        outputs.words.display()
    ));

    let stop_words = if config.keep_stop_words {
        StopWordSet::empty()
    } else {
        StopWordSet::english()
    };
    let mut aggregator = Aggregator::new(stop_words, config.aggregator);

    for path in &documents.paths {
        reporter.detail(format!("reading {}", display_path(path, input_dir)));
        process_document(path, &mut aggregator, &mut words, &outputs.words)?;
    }

    words.flush().map_err(|source| NgramError::OutputWrite {
        path: outputs.words.clone(),
        what: "words",
        source,
    })?;
    drop(words);

    let (tables, tally, stats) = aggregator.finish();

    write_output(&outputs.char_counts, "character counts", reporter, |w| {
        write_char_counts(w, &tally)
    })?;

    for order in NgramOrder::all() {
        let table = tables.table(order);
        write_output(outputs.for_order(order), order.name(), reporter, |w| {
            write_table(w, table)
        })?;
    }

    reporter.status(format!(
        "Processed {} documents, {} tokens ({} accepted)",
        stats.documents, stats.tokens, stats.accepted_tokens
    ));

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn setup(files: &[(&str, &str)]) -> (TempDir, PipelineConfig) {
        let temp = tempdir().unwrap();
        let corpus = temp.path().join("corpus");
        fs::create_dir(&corpus).unwrap();
        for (name, content) in files {
            let path = corpus.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        let config = PipelineConfig {
            input_dir: corpus,
            outputs: OutputPaths {
                words: out.join("words.txt"),
                char_counts: out.join("chars.txt"),
                unigrams: out.join("uni.txt"),
                bigrams: out.join("bi.txt"),
                trigrams: out.join("tri.txt"),
            },
            scan: ScanOptions::default(),
            aggregator: AggregatorConfig::default(),
            keep_stop_words: false,
        };
        (temp, config)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_two_word_corpus() {
        let (_temp, config) = setup(&[("a.txt", "Cat Dog\n")]);
        let stats = run(&config, &Reporter::silent()).unwrap();

        assert_eq!(read(&config.outputs.words), "cat\ndog\n");
        assert_eq!(read(&config.outputs.unigrams), "cat\t1\ndog\t1\n");
        assert_eq!(read(&config.outputs.bigrams), "");
        assert_eq!(read(&config.outputs.trigrams), "");
        assert_eq!(stats.documents, 1);
        assert_eq!(stats.tokens, 2);
    }

    #[test]
    fn test_word_list_includes_stop_words() {
        let (_temp, config) = setup(&[("a.txt", "The Quick fox.\nand THE dog")]);
        run(&config, &Reporter::silent()).unwrap();

        assert_eq!(
            read(&config.outputs.words),
            "the\nquick\nfox\nand\nthe\ndog\n"
        );
        assert_eq!(read(&config.outputs.unigrams), "dog\t1\nfox\t1\nquick\t1\n");
        assert_eq!(read(&config.outputs.bigrams), "fox dog\t1\n");
        assert_eq!(read(&config.outputs.trigrams), "quick fox dog\t1\n");
    }

    #[test]
    fn test_char_counts_file() {
        let (_temp, config) = setup(&[("a.txt", "The Quick fox.")]);
        run(&config, &Reporter::silent()).unwrap();

        let chars = read(&config.outputs.char_counts);
        let lines: Vec<&str> = chars.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "a\t0");
        assert_eq!(lines[4], "e\t1");
        assert_eq!(lines[23], "x\t1");
        let total: u64 = lines
            .iter()
            .map(|l| l.split('\t').nth(1).unwrap().parse::<u64>().unwrap())
            .sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn test_documents_in_sorted_order() {
        let (_temp, config) = setup(&[
            ("b.txt", "gamma delta"),
            ("a.txt", "alpha beta"),
            ("notes.md", "ignored words"),
        ]);
        run(&config, &Reporter::silent()).unwrap();

        assert_eq!(
            read(&config.outputs.words),
            "alpha\nbeta\ngamma\ndelta\n"
        );
        assert_eq!(
            read(&config.outputs.bigrams),
            "beta gamma\t1\ngamma delta\t1\n"
        );
    }

    #[test]
    fn test_reset_window_per_document() {
        let (_temp, mut config) = setup(&[("a.txt", "alpha beta"), ("b.txt", "gamma delta")]);
        config.aggregator.reset_window_per_document = true;
        run(&config, &Reporter::silent()).unwrap();

        assert_eq!(read(&config.outputs.bigrams), "");
        assert_eq!(read(&config.outputs.trigrams), "");
    }

    #[test]
    fn test_keep_stop_words() {
        let (_temp, mut config) = setup(&[("a.txt", "the cat sat")]);
        config.keep_stop_words = true;
        run(&config, &Reporter::silent()).unwrap();

        assert_eq!(read(&config.outputs.trigrams), "the cat sat\t1\n");
    }

    #[test]
    fn test_idempotent_output() {
        let (_temp, config) = setup(&[
            ("x/1.txt", "It was the best of times, it was the worst of times."),
            ("y/2.txt", "Call me Ishmael.\nSome years ago, never mind how long."),
        ]);
        run(&config, &Reporter::silent()).unwrap();
        let first: Vec<String> = [
            &config.outputs.words,
            &config.outputs.char_counts,
            &config.outputs.unigrams,
            &config.outputs.bigrams,
            &config.outputs.trigrams,
        ]
        .iter()
        .map(|p| read(p))
        .collect();

        run(&config, &Reporter::silent()).unwrap();
        let second: Vec<String> = [
            &config.outputs.words,
            &config.outputs.char_counts,
            &config.outputs.unigrams,
            &config.outputs.bigrams,
            &config.outputs.trigrams,
        ]
        .iter()
        .map(|p| read(p))
        .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_corpus_writes_empty_tables() {
        let (_temp, config) = setup(&[]);
        let stats = run(&config, &Reporter::silent()).unwrap();

        assert_eq!(stats.documents, 0);
        assert_eq!(read(&config.outputs.words), "");
        assert_eq!(read(&config.outputs.char_counts).lines().count(), 26);
        assert_eq!(read(&config.outputs.unigrams), "");
    }

    #[test]
    fn test_missing_input_dir() {
        let (_temp, mut config) = setup(&[]);
        config.input_dir = config.input_dir.join("missing");
        let err = run(&config, &Reporter::silent()).unwrap_err();
        assert!(matches!(err, NgramError::InputDirectory { .. }));
        assert!(!config.outputs.words.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let (_temp, mut config) = setup(&[("a.txt", "alpha beta gamma")]);
        config.outputs.bigrams = config.input_dir.join("no/such/dir/bi.txt");
        let err = run(&config, &Reporter::silent()).unwrap_err();
        assert!(matches!(err, NgramError::OutputOpen { what: "bigrams", .. }));
        assert!(!config.outputs.trigrams.exists());
    }

    #[test]
    fn test_latin1_document_is_tokenized() {
        let (_temp, config) = setup(&[]);
        fs::write(
            config.input_dir.join("latin1.txt"),
            b"caf\xe9 au lait\nwhale sea\n",
        )
        .unwrap();
        let stats = run(&config, &Reporter::silent()).unwrap();

        assert_eq!(read(&config.outputs.words), "caf\nau\nlait\nwhale\nsea\n");
        assert_eq!(
            read(&config.outputs.unigrams),
            "au\t1\ncaf\t1\nlait\t1\nsea\t1\nwhale\t1\n"
        );
        assert_eq!(read(&config.outputs.bigrams), "au lait\t1\nlait whale\t1\nwhale sea\t1\n");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.letters, 17);
    }

    #[test]
    fn test_crlf_lines() {
        let (_temp, config) = setup(&[("dos.txt", "alpha beta\r\ngamma\r\n")]);
        let stats = run(&config, &Reporter::silent()).unwrap();

        assert_eq!(read(&config.outputs.words), "alpha\nbeta\ngamma\n");
        assert_eq!(stats.lines, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_failure_is_input_error() {
        // Opening a directory succeeds on unix; reading it fails
        let temp = tempdir().unwrap();
        let dir = temp.path().join("folder.txt");
        fs::create_dir(&dir).unwrap();
        let mut agg = Aggregator::new(StopWordSet::english(), AggregatorConfig::default());
        let mut words: Vec<u8> = Vec::new();

        let err = process_document(&dir, &mut agg, &mut words, Path::new("words.txt")).unwrap_err();
        match err {
            NgramError::InputRead { path, .. } => assert_eq!(path, dir),
            other => panic!("unexpected error: {}", other),
        }
        assert!(words.is_empty());
    }

    #[test]
    fn test_missing_document_is_input_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("gone.txt");
        let mut agg = Aggregator::new(StopWordSet::english(), AggregatorConfig::default());

        let err = process_document(&missing, &mut agg, &mut Vec::<u8>::new(), Path::new("words.txt"))
            .unwrap_err();
        assert!(matches!(err, NgramError::InputRead { .. }));
    }
}
