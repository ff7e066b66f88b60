//! Backends module - Filesystem collaborators
//!
//! Provides:
//! - scan: Ordered document discovery under an input directory

pub mod scan;
