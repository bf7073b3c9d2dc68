//! Backends module - Filesystem discovery
//!
//! Contains:
//! - scan: README discovery under a traversal root

pub mod scan;
