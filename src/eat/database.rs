//! Binds a mode to its open data/index file pair.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;

use super::error::{EatError, Result};
use super::models::Mode;

/// An open database pair: the association data file plus its index.
///
/// There is no cache; every lookup rescans the index from the start, so
/// holding the pair open is purely an open-handle convenience.
#[derive(Debug)]
pub struct Database {
    pub mode: Mode,
    base: PathBuf,
    pub data: File,
    pub index: BufReader<File>,
    /// Headword count published for the shipped index. Informational;
    /// lookups scan to end-of-file rather than counting entries.
    pub expected_entries: u64,
}

impl Database {
    /// Open the file pair for `mode` in the current directory.
    pub fn open(mode: Mode) -> Result<Self> {
        Self::open_in(".", mode)
    }

    /// Open the file pair for `mode` under `base`.
    pub fn open_in(base: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        let base = base.as_ref().to_path_buf();
        let data = open_file(&base.join(mode.data_file()))?;
        let index = BufReader::new(open_file(&base.join(mode.index_file()))?);
        info!(
            "database opened in {} mode ({} headwords expected)",
            mode,
            mode.expected_entries()
        );
        Ok(Self {
            mode,
            base,
            data,
            index,
            expected_entries: mode.expected_entries(),
        })
    }

    /// Re-open for `mode`, closing the current pair first. Re-opening the
    /// same mode is allowed and simply starts the pair fresh.
    pub fn switch(&mut self, mode: Mode) -> Result<()> {
        *self = Self::open_in(&self.base, mode)?;
        Ok(())
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| EatError::Open {
        path: path.to_path_buf(),
        source,
    })
}
