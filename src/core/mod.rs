//! Core module - Data model, errors, path helpers and table rendering
//!
//! This module provides:
//! - Header records and index rows
//! - The pipeline error type
//! - Path helpers for discovery and links
//! - The Markdown index renderer

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
