//! # eatshow
//!
//! A lookup tool over the Edinburgh Associative Thesaurus, a flat-file
//! word-association database. Given a cue word it finds the matching
//! index entry, decodes the pipe-delimited association record at the
//! recorded offset, and renders each `(word, count)` pair with its
//! proportion of the total frequency.
//!
//! Two symmetric database directions are supported: stimulus→response
//! and response→stimulus.
pub mod eat;

// Re-export the main types for convenience
pub use eat::{Association, Database, EatError, IndexEntry, Mode, Result, Session};
