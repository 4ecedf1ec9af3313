//! Field trimming helpers for the fixed-width index format

/// Truncate at the first space.
///
/// Headwords are space-padded out to the index field width and must not
/// contain internal spaces, so the first space ends the word.
pub fn trim_padding(s: &str) -> &str {
    match s.find(' ') {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// Truncate at the first line break. Accepts both LF and CRLF input.
pub fn trim_line_break(s: &str) -> &str {
    match s.find(['\n', '\r']) {
        Some(pos) => &s[..pos],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_ends_at_first_space() {
        assert_eq!(trim_padding("MAN                 "), "MAN");
        assert_eq!(trim_padding("MAN"), "MAN");
        assert_eq!(trim_padding(""), "");
    }

    #[test]
    fn line_break_handles_lf_and_crlf() {
        assert_eq!(trim_line_break("man\n"), "man");
        assert_eq!(trim_line_break("man\r\n"), "man");
        assert_eq!(trim_line_break("man"), "man");
    }
}
