//! Formats decoded associations for the console and the echo file.

use super::models::{Association, IndexEntry, Mode};
use super::session::Session;

/// Separator bracketing a result listing.
pub const DEMARK_LINE: &str =
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Render one decoded record.
///
/// Every pair line goes to the console and, when configured, the echo
/// file. The numbering prefix and the limit are applied independently:
/// limiting never depends on whether numbering is on.
pub fn render<I>(pairs: I, entry: &IndexEntry, session: &mut Session)
where
    I: Iterator<Item = Association>,
{
    if session.demark {
        emit(session, DEMARK_LINE);
    }
    let mut shown = 0usize;
    for pair in pairs {
        if session.limit && shown >= session.limit_count {
            break;
        }
        shown += 1;
        let line = format_pair(
            &pair,
            shown,
            entry.total_freq,
            session.tab_pad,
            session.number,
        );
        emit(session, &line);
    }
    if session.demark {
        emit(session, DEMARK_LINE);
    }
}

/// Closing summary printed after a successful listing. Console only.
pub fn render_summary(cue: &str, mode: Mode, entry: &IndexEntry) {
    let role = match mode {
        Mode::Response => "was [one of] the 'response(s)' to the stimuli above",
        Mode::Stimulus => "was [one of] the 'stimuli' to the responses above",
    };
    println!("\n\t{} {}\n", cue, role);
    println!("\tNumber of different answers: {}", entry.answer_count);
    println!("\t Total count of all answers: {}\n", entry.total_freq);
}

/// Proportion of the total frequency this count represents.
///
/// An index entry carrying a zero total has no meaningful proportion;
/// 0.0 is reported rather than dividing by zero.
pub fn proportion(count: u32, total_freq: u32) -> f32 {
    if total_freq == 0 {
        0.0
    } else {
        count as f32 / total_freq as f32
    }
}

/// Format a single pair: numbering prefix, then tab or column layout.
pub fn format_pair(
    pair: &Association,
    ordinal: usize,
    total_freq: u32,
    tab_pad: bool,
    number: bool,
) -> String {
    let labelled = if number {
        format!("{:4}: {}", ordinal, pair.word)
    } else {
        format!("      {}", pair.word)
    };
    let prop = proportion(pair.count, total_freq);
    if tab_pad {
        format!("{}\t{}\t{:.2}", labelled, pair.count, prop)
    } else {
        format!("{:<25} {:3} {:5.2}", labelled, pair.count, prop)
    }
}

fn emit(session: &mut Session, line: &str) {
    println!("{}", line);
    session.echo_line(line);
}
