//! Core data types shared across the lookup pipeline.

use std::fmt;

/// Which of the two symmetric association directions is active.
///
/// Stimulus mode answers "what was said in response to this word";
/// response mode answers "which stimuli produced this word".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stimulus,
    Response,
}

impl Mode {
    /// The opposite direction.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Stimulus => Mode::Response,
            Mode::Response => Mode::Stimulus,
        }
    }

    /// File name of the association data file for this mode.
    pub fn data_file(self) -> &'static str {
        match self {
            Mode::Stimulus => "sr_concise",
            Mode::Response => "rs_concise",
        }
    }

    /// File name of the index file for this mode.
    pub fn index_file(self) -> &'static str {
        match self {
            Mode::Stimulus => "sr_index",
            Mode::Response => "rs_index",
        }
    }

    /// Headword count published for the shipped index files. If the
    /// database files are rebuilt these values should be revised too.
    pub fn expected_entries(self) -> u64 {
        match self {
            Mode::Stimulus => 8211,
            Mode::Response => 22776,
        }
    }

    /// Mixed-case name used in mode-switch messages.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Stimulus => "Stimulus",
            Mode::Response => "Response",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stimulus => write!(f, "STIMULUS"),
            Mode::Response => write!(f, "RESPONSE"),
        }
    }
}

/// One parsed index record.
///
/// The head offset is carried by the index format but lookup only ever
/// seeks to the tail offset; it is kept for diagnostics and dump tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Number of distinct answer words recorded for the headword.
    pub answer_count: u32,
    /// Total frequency over all answers. The data file is historical and
    /// hand-edited, so the record's counts need not sum to exactly this.
    pub total_freq: u32,
    pub head_offset: u64,
    /// Byte position in the data file where the association record begins.
    pub tail_offset: u64,
}

/// One decoded `(word, frequency)` association pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub word: String,
    pub count: u32,
}
