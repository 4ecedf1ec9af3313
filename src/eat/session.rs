//! Per-session display and mode configuration.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::error::{EatError, Result};
use super::models::Mode;

/// Echo sink mirroring console output, opened in append mode.
#[derive(Debug)]
pub struct EchoFile {
    pub path: PathBuf,
    file: File,
}

/// Mutable display and mode state for one command session.
///
/// Batch execution resets this between instruction lines so each line
/// behaves as an independent invocation.
#[derive(Debug)]
pub struct Session {
    pub mode: Mode,
    /// Tab-separated output instead of the fixed-width column layout.
    pub tab_pad: bool,
    /// Prefix each pair with a 1-based ordinal.
    pub number: bool,
    /// Bracket listings with a demarcation line.
    pub demark: bool,
    /// Stop after `limit_count` pairs.
    pub limit: bool,
    pub limit_count: usize,
    pub echo: Option<EchoFile>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: Mode::Stimulus,
            tab_pad: false,
            number: false,
            demark: true,
            limit: false,
            limit_count: 0,
            echo: None,
        }
    }
}

impl Session {
    /// Restore every field to its default, closing any open echo file.
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    /// Open (or replace) the echo file in append mode, creating it if it
    /// does not exist. Any previously open sink is closed first.
    pub fn set_echo(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.echo = None;
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| EatError::EchoOpen {
                path: path.clone(),
                source,
            })?;
        info!("echo file opened: {}", path.display());
        self.echo = Some(EchoFile { path, file });
        Ok(())
    }

    /// Mirror one already-formatted line to the echo sink, if configured.
    ///
    /// A write failure drops that sink's line only; console output is
    /// unaffected.
    pub fn echo_line(&mut self, line: &str) {
        if let Some(echo) = &mut self.echo {
            if let Err(e) = writeln!(echo.file, "{}", line) {
                warn!("echo write to {} failed: {}", echo.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let session = Session::default();
        assert_eq!(session.mode, Mode::Stimulus);
        assert!(!session.tab_pad);
        assert!(!session.number);
        assert!(session.demark);
        assert!(!session.limit);
        assert_eq!(session.limit_count, 0);
        assert!(session.echo.is_none());
    }

    #[test]
    fn reset_releases_echo_and_restores_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = Session::default();
        session.number = true;
        session.mode = Mode::Response;
        session
            .set_echo(dir.path().join("echo.txt"))
            .expect("open echo");
        session.reset();
        assert!(session.echo.is_none());
        assert!(!session.number);
        assert_eq!(session.mode, Mode::Stimulus);
    }

    #[test]
    fn echo_appends_across_reopens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("echo.txt");
        let mut session = Session::default();
        session.set_echo(&path).expect("open echo");
        session.echo_line("first");
        session.set_echo(&path).expect("reopen echo");
        session.echo_line("second");
        let got = std::fs::read_to_string(&path).expect("read echo");
        assert_eq!(got, "first\nsecond\n");
    }
}
