//! Error types for the corpus I/O boundary

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal I/O failures; every variant ends the run
#[derive(Error, Debug)]
pub enum NgramError {
    #[error("Unable to open {} for writing {what}", .path.display())]
    OutputOpen {
        path: PathBuf,
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write {what} to {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("File {} could not be read", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input directory {} is not readable", .path.display())]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for corpus I/O
pub type Result<T> = std::result::Result<T, NgramError>;
