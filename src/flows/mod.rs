//! Flows module - The indexing pipeline
//!
//! Contains:
//! - index: discover -> extract -> parse -> render -> write
//! - splice: the sentinel-delimited region of the target README

pub mod index;
pub mod splice;
