//! Flows module - The corpus pass
//!
//! Provides:
//! - aggregate: Stop-word filtering and the two-token n-gram window
//! - pipeline: Document reading and output file writing

pub mod aggregate;
pub mod pipeline;
