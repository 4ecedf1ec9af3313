//! Decodes the pipe-delimited association record at a data-file offset.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};

use log::debug;

use super::error::{EatError, Result};
use super::models::Association;
use super::utils;

/// Delimiter between the alternating word and count tokens of a record.
const DELIMITER: char = '|';

/// Seek to `tail_offset` in the data file and decode the record line
/// found there.
///
/// A failed seek, a failed read, or an empty read is a bad address: the
/// index pointed at nothing usable. The caller reports it and carries
/// on; the file stays usable for the next cue.
pub fn decode(data: &mut File, tail_offset: u64) -> Result<Associations> {
    data.seek(SeekFrom::Start(tail_offset))
        .map_err(|_| EatError::BadAddress(tail_offset))?;
    let mut raw = Vec::new();
    BufReader::new(&mut *data)
        .read_until(b'\n', &mut raw)
        .map_err(|_| EatError::BadAddress(tail_offset))?;
    if raw.is_empty() {
        return Err(EatError::BadAddress(tail_offset));
    }
    let text = String::from_utf8_lossy(&raw);
    Ok(Associations::new(utils::trim_line_break(&text).to_string()))
}

/// Lazy iterator over the `(word, count)` pairs of one record line.
///
/// Tokens alternate word, count. Empty and whitespace-only tokens are
/// skipped, so the doubled delimiters the hand-edited corpus sometimes
/// carries (`WORD||5`) never shift the pairing. A count that fails to
/// parse yields 0 rather than ending the record, as does a trailing word
/// with no count token at all.
///
/// File order is descending frequency by construction of the source
/// corpus; that is inherited data, not an enforced invariant.
#[derive(Debug)]
pub struct Associations {
    line: String,
    pos: usize,
}

impl Associations {
    pub(crate) fn new(line: String) -> Self {
        Self { line, pos: 0 }
    }

    /// Next non-empty token, trimmed.
    fn next_token(&mut self) -> Option<String> {
        while self.pos < self.line.len() {
            let rest = &self.line[self.pos..];
            let (token, used) = match rest.find(DELIMITER) {
                Some(at) => (&rest[..at], at + 1),
                None => (rest, rest.len()),
            };
            self.pos += used;
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
        None
    }
}

impl Iterator for Associations {
    type Item = Association;

    fn next(&mut self) -> Option<Association> {
        let word = self.next_token()?;
        let count = match self.next_token() {
            Some(token) => match token.parse() {
                Ok(count) => count,
                Err(_) => {
                    debug!("count token {:?} after {:?} did not parse; using 0", token, word);
                    0
                }
            },
            None => 0,
        };
        Some(Association { word, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(line: &str) -> Vec<(String, u32)> {
        Associations::new(line.to_string())
            .map(|a| (a.word, a.count))
            .collect()
    }

    #[test]
    fn alternating_tokens_pair_up() {
        assert_eq!(
            pairs("WOMAN|40|BOY|30|GIRL|20"),
            vec![
                ("WOMAN".to_string(), 40),
                ("BOY".to_string(), 30),
                ("GIRL".to_string(), 20),
            ]
        );
    }

    #[test]
    fn doubled_delimiter_decodes_like_single() {
        assert_eq!(pairs("WORD||5"), pairs("WORD|5"));
        assert_eq!(pairs("A|1|WORD||5|B|2"), pairs("A|1|WORD|5|B|2"));
    }

    #[test]
    fn unparseable_count_becomes_zero() {
        assert_eq!(
            pairs("WORD|x|NEXT|3"),
            vec![("WORD".to_string(), 0), ("NEXT".to_string(), 3)]
        );
    }

    #[test]
    fn trailing_word_without_count_gets_zero() {
        assert_eq!(pairs("A|1|B"), vec![("A".to_string(), 1), ("B".to_string(), 0)]);
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(pairs("").is_empty());
        assert!(pairs("|||").is_empty());
    }
}
