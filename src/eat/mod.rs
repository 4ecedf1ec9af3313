//! Lookup pipeline over the Edinburgh Associative Thesaurus flat files.
//!
//! The database is a pair of pre-built static files per direction: a
//! line-oriented data file of pipe-delimited `word|count` records, and a
//! fixed-width index mapping each headword to a byte offset into it.
//! A lookup scans the index sequentially for the cue, seeks the data
//! file to the recorded tail offset, decodes the association list there,
//! and renders each pair with its proportion of the total frequency.
//!
//! Everything is read-only, single-threaded, and uncached: each lookup
//! rescans the index from the start.

pub mod database;
pub mod error;
pub mod index;
pub mod models;
pub mod record;
pub mod render;
pub mod session;
pub mod utils;

use log::debug;

pub use database::Database;
pub use error::{EatError, Result};
pub use models::{Association, IndexEntry, Mode};
pub use session::Session;

use index::ScanOutcome;

/// Look up one cue word and render the result.
///
/// The cue is trimmed and upper-cased before scanning; stored headwords
/// are upper case. Any miss, including a malformed index entry, reports
/// a plain "not found". A bad tail address is reported and leaves the
/// database usable for the next cue.
pub fn look_up(db: &mut Database, session: &mut Session, cue: &str) -> Result<()> {
    let cue = utils::trim_line_break(cue).trim().to_uppercase();
    println!("\nLooking for: {} in {} MODE\n", cue, db.mode);

    match index::find(&mut db.index, &cue)? {
        ScanOutcome::Miss(reason) => {
            debug!("index scan for {:?} missed: {:?}", cue, reason);
            println!("eatshow: {}: not found", cue);
        }
        ScanOutcome::Found(entry) => match record::decode(&mut db.data, entry.tail_offset) {
            Ok(pairs) => {
                render::render(pairs, &entry, session);
                render::render_summary(&cue, db.mode, &entry);
            }
            Err(EatError::BadAddress(offset)) => {
                eprintln!("eatshow: {}: bad address index file", offset);
            }
            Err(e) => return Err(e),
        },
    }
    Ok(())
}

/// Raw dump of every headword in the current index, in file order.
///
/// Honors the numbering flag and the echo file. The index carries one
/// entry per recorded spelling, so the dump contains duplicates; a
/// trailer on stderr says so.
pub fn dump_headwords(db: &mut Database, session: &mut Session) -> Result<()> {
    let mut listed = 0u64;
    let numbered = session.number;
    index::headwords(&mut db.index, |word| {
        listed += 1;
        let line = if numbered {
            format!("{:5}: {}", listed, word)
        } else {
            word.to_string()
        };
        println!("{}", line);
        session.echo_line(&line);
    })?;
    eprintln!(
        "\nAlthough {} entries were listed, as this is a raw dump of the index,",
        listed
    );
    eprintln!("the output will contain a number of duplicates.");
    Ok(())
}
