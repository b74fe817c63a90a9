#![cfg(feature = "std")]
//! Opaque snapshot persistence for a match.
//!
//! A match is saved as one bincode-encoded [`MatchState`] under a
//! well-known name. Writes go through a temp file and a rename so a
//! concurrent load never observes a partial snapshot.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::game::MatchState;

/// Well-known file name a match is saved under.
pub const DEFAULT_SAVE_NAME: &str = "broadside_save.dat";

/// Errors surfaced by the snapshot store.
#[derive(Debug)]
pub enum StoreError {
    /// No snapshot exists at the path.
    NotFound,
    /// The file exists but does not decode to a match snapshot.
    Invalid(bincode::Error),
    /// Any other filesystem failure.
    Io(io::Error),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound
        } else {
            StoreError::Io(err)
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "no saved match found"),
            StoreError::Invalid(e) => write!(f, "saved match is not readable: {}", e),
            StoreError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

/// True when a snapshot exists at `path`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Encode `state` and write it to `path` atomically.
pub fn write_snapshot(state: &MatchState, path: &Path) -> Result<(), StoreError> {
    let bytes = bincode::serialize(state).map_err(StoreError::Invalid)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path)?;
    log::info!("saved match snapshot ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}

/// Read and decode the snapshot at `path`.
pub fn read_snapshot(path: &Path) -> Result<MatchState, StoreError> {
    let bytes = fs::read(path)?;
    let state = bincode::deserialize(&bytes).map_err(StoreError::Invalid)?;
    log::info!("loaded match snapshot from {}", path.display());
    Ok(state)
}
