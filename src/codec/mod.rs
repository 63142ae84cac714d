//! This module handles conversion between tasks and the lines of a save file
//!
//! The saved line of a task is also the way it is displayed (e.g. `[D][ ] submit report (by: Aug 30 2025 6pm)`).
//! Building a line is thus straightforward, while parsing one back means reversing this (lossy) rendering.

mod parser;
pub use parser::parse;
mod builder;
pub use builder::build_from;

/// Length of the `[T][X]` markers that start every line
pub(crate) const PREFIX_LEN: usize = 6;
pub(crate) const BY_DELIMITER: &str = " (by: ";
pub(crate) const FROM_DELIMITER: &str = " (from: ";
pub(crate) const TO_DELIMITER: &str = " to: ";
pub(crate) const CLAUSE_END: char = ')';
pub(crate) const DONE_MARKER: char = 'X';
pub(crate) const NOT_DONE_MARKER: char = ' ';
