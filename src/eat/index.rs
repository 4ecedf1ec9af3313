//! Sequential scanner over the fixed-width index file.
//!
//! Index record format: a 20-byte space-padded headword field (not
//! necessarily terminated by its own line break), then a line of four
//! whitespace-separated integers:
//! `answer_count total_freq head_offset tail_offset`.

use std::io::{BufRead, Read, Seek, SeekFrom};

use log::debug;

use super::error::Result;
use super::models::IndexEntry;
use super::utils;

/// Width of the padded headword field, in bytes.
const HEADWORD_FIELD: usize = 20;

/// Why a scan ended without a match. Diagnostic only: every variant is
/// reported to the user as a plain "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// End of index reached without a matching headword.
    Exhausted,
    /// A headword field was present but the entry ended mid-record.
    TruncatedEntry,
    /// The numeric line did not parse as exactly four integers.
    MalformedCounts,
}

/// Outcome of one index scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(IndexEntry),
    Miss(MissReason),
}

/// Scan the index for `cue`; the first matching headword wins.
///
/// Every call rewinds the handle before scanning and again before
/// returning, success or failure, so consecutive lookups are independent.
/// The comparison assumes the caller upper-cased the cue; stored
/// headwords are upper case.
pub fn find<R: BufRead + Seek>(index: &mut R, cue: &str) -> Result<ScanOutcome> {
    index.seek(SeekFrom::Start(0))?;
    let outcome = scan(index, cue);
    index.seek(SeekFrom::Start(0))?;
    outcome
}

/// Walk every headword in file order, calling `visit` for each.
///
/// Used by the raw index dump. Follows the same rewind discipline as
/// `find` and stops quietly at the first malformed entry.
pub fn headwords<R, F>(index: &mut R, mut visit: F) -> Result<()>
where
    R: BufRead + Seek,
    F: FnMut(&str),
{
    index.seek(SeekFrom::Start(0))?;
    loop {
        let headword = match read_headword(index)? {
            Some(word) => word,
            None => break,
        };
        let numbers = match read_numeric_line(index)? {
            Some(line) => line,
            None => break,
        };
        if parse_entry(&numbers).is_none() {
            break;
        }
        visit(&headword);
    }
    index.seek(SeekFrom::Start(0))?;
    Ok(())
}

fn scan<R: BufRead>(index: &mut R, cue: &str) -> Result<ScanOutcome> {
    loop {
        let headword = match read_headword(index)? {
            Some(word) => word,
            None => return Ok(ScanOutcome::Miss(MissReason::Exhausted)),
        };
        let numbers = match read_numeric_line(index)? {
            Some(line) => line,
            None => {
                debug!("index entry for {:?} truncated at end of file", headword);
                return Ok(ScanOutcome::Miss(MissReason::TruncatedEntry));
            }
        };
        let entry = match parse_entry(&numbers) {
            Some(entry) => entry,
            None => {
                debug!("malformed numeric line for {:?}: {:?}", headword, numbers);
                return Ok(ScanOutcome::Miss(MissReason::MalformedCounts));
            }
        };
        if headword == cue {
            return Ok(ScanOutcome::Found(entry));
        }
    }
}

/// Read one headword field: up to 20 bytes, stopping early after a line
/// break, then trim the padding.
fn read_headword<R: Read>(index: &mut R) -> Result<Option<String>> {
    let mut field = Vec::with_capacity(HEADWORD_FIELD);
    let mut byte = [0u8; 1];
    while field.len() < HEADWORD_FIELD {
        if index.read(&mut byte)? == 0 {
            break;
        }
        field.push(byte[0]);
        if byte[0] == b'\n' {
            break;
        }
    }
    if field.is_empty() {
        return Ok(None);
    }
    let text = String::from_utf8_lossy(&field);
    Ok(Some(
        utils::trim_padding(utils::trim_line_break(&text)).to_string(),
    ))
}

/// Read the next non-blank line. Blank lines between the headword field
/// and its numbers are skipped, the way `fscanf` skips leading whitespace.
fn read_numeric_line<R: BufRead>(index: &mut R) -> Result<Option<String>> {
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if index.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

/// Parse exactly four whitespace-separated integers.
fn parse_entry(line: &str) -> Option<IndexEntry> {
    let mut fields = line.split_whitespace();
    let answer_count = fields.next()?.parse().ok()?;
    let total_freq = fields.next()?.parse().ok()?;
    let head_offset = fields.next()?.parse().ok()?;
    let tail_offset = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(IndexEntry {
        answer_count,
        total_freq,
        head_offset,
        tail_offset,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn entry_line(word: &str, numbers: &str) -> String {
        format!("{:<20}\n{}\n", word, numbers)
    }

    fn sample_index() -> Cursor<Vec<u8>> {
        let mut text = String::new();
        text.push_str(&entry_line("MAN", "50 120 100 4096"));
        text.push_str(&entry_line("DOG", "10 40 200 8192"));
        Cursor::new(text.into_bytes())
    }

    #[test]
    fn finds_first_match_and_rewinds() {
        let mut index = sample_index();
        let outcome = find(&mut index, "DOG").expect("scan");
        assert_eq!(
            outcome,
            ScanOutcome::Found(IndexEntry {
                answer_count: 10,
                total_freq: 40,
                head_offset: 200,
                tail_offset: 8192,
            })
        );
        // Rewound: an earlier headword is still reachable.
        let outcome = find(&mut index, "MAN").expect("scan");
        assert!(matches!(outcome, ScanOutcome::Found(_)));
    }

    #[test]
    fn miss_reports_exhausted() {
        let mut index = sample_index();
        let outcome = find(&mut index, "CAT").expect("scan");
        assert_eq!(outcome, ScanOutcome::Miss(MissReason::Exhausted));
    }

    #[test]
    fn headword_field_without_line_break_still_parses() {
        // Numeric line follows the 20-byte field with no break between.
        let text = format!("{:<20}50 120 100 4096\n", "MAN");
        let mut index = Cursor::new(text.into_bytes());
        let outcome = find(&mut index, "MAN").expect("scan");
        assert!(matches!(outcome, ScanOutcome::Found(_)));
    }

    #[test]
    fn malformed_numeric_line_is_a_miss() {
        let mut text = entry_line("MAN", "50 120 100");
        text.push_str(&entry_line("DOG", "10 40 200 8192"));
        let mut index = Cursor::new(text.into_bytes());
        let outcome = find(&mut index, "DOG").expect("scan");
        assert_eq!(outcome, ScanOutcome::Miss(MissReason::MalformedCounts));
    }

    #[test]
    fn truncated_entry_is_a_miss() {
        let text = format!("{:<20}", "MAN");
        let mut index = Cursor::new(text.into_bytes());
        let outcome = find(&mut index, "MAN").expect("scan");
        assert_eq!(outcome, ScanOutcome::Miss(MissReason::TruncatedEntry));
    }

    #[test]
    fn headwords_visits_file_order() {
        let mut index = sample_index();
        let mut seen = Vec::new();
        headwords(&mut index, |word| seen.push(word.to_string())).expect("dump");
        assert_eq!(seen, vec!["MAN", "DOG"]);
    }
}
