//! Front matter module
//!
//! Reads the leading `---` block of a README and parses it into fields.

pub mod extract;
pub mod parse;
