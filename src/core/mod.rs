//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Tokenization of lines into lowercase words
//! - The fixed stop-word list
//! - Character tallies and n-gram frequency tables
//! - Rendering of the tab-delimited output files
//! - Error types, path helpers and status reporting

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod stopwords;
pub mod tally;
pub mod tokenizer;
pub mod util;
