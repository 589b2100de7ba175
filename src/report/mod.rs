//! Reporting utilities: formatted terminal output for laws and curves.

pub mod format;

pub use format::*;
