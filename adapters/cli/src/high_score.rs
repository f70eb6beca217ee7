//! Best-effort integer-text store for the persisted high score.
//!
//! Every failure here is non-fatal by design: a missing or corrupt store
//! reads as zero, and a failed write leaves the in-memory value correct for
//! the rest of the session.

use std::{fs, io, num::ParseIntError, path::Path};

use thiserror::Error;

/// Failures the high-score store can produce.
#[derive(Debug, Error)]
pub(crate) enum HighScoreError {
    /// The store could not be read or written.
    #[error("could not access the high-score store: {0}")]
    Io(#[from] io::Error),
    /// The store held something other than an integer.
    #[error("the high-score store did not hold an integer: {0}")]
    Corrupt(#[from] ParseIntError),
}

/// Loads the persisted high score, treating missing or corrupt data as zero.
pub(crate) fn load(path: &Path) -> u32 {
    read(path).unwrap_or(0)
}

/// Reads the persisted high score, surfacing store failures.
pub(crate) fn read(path: &Path) -> Result<u32, HighScoreError> {
    let text = fs::read_to_string(path)?;
    Ok(text.trim().parse()?)
}

/// Persists the provided high score as integer text.
pub(crate) fn save(path: &Path, score: u32) -> Result<(), HighScoreError> {
    fs::write(path, score.to_string())?;
    Ok(())
}
