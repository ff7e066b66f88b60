//! Document scanning backend
//!
//! Uses the ignore crate's walker with all filters disabled, so the walk is a
//! plain depth-first traversal. Entries are sorted by file name inside each
//! directory, which fixes the document order and therefore the n-grams that
//! span document boundaries.

use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{NgramError, Result};
use crate::core::paths::has_extension;

/// Which documents to collect
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extension to keep, without the dot
    pub extension: String,
    /// Stop after this many documents
    pub max_files: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            max_files: None,
        }
    }
}

/// Ordered documents found under a root
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    pub paths: Vec<PathBuf>,
    /// True when `max_files` cut the walk short
    pub capped: bool,
}

impl DocumentSet {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Path of the entry a walk error refers to, if it names one
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// Map a walk error to the failing entry, keeping the underlying io error
fn walk_error(root: &Path, err: ignore::Error) -> NgramError {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    NgramError::InputDirectory { path, source }
}

/// Collect documents under `root` in deterministic depth-first order
pub fn collect_documents(root: &Path, opts: &ScanOptions) -> Result<DocumentSet> {
    let metadata = std::fs::metadata(root).map_err(|source| NgramError::InputDirectory {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(NgramError::InputDirectory {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut documents = DocumentSet::default();

    for entry in builder.build() {
        let entry = entry.map_err(|err| walk_error(root, err))?;

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file || !has_extension(entry.path(), &opts.extension) {
            continue;
        }

        if opts.max_files.is_some_and(|max| documents.len() >= max) {
            documents.capped = true;
            break;
        }

        documents.paths.push(entry.into_path());
    }

    Ok(documents)
}
