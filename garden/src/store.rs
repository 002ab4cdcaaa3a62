//! File-backed local snapshot store.
//!
//! The interactive host persists a full-fidelity snapshot after every
//! completed stroke, placement, drag, or deletion. Loading is forgiving:
//! a missing file, unreadable bytes, or malformed JSON all read as "no
//! saved garden" so the session falls back to random initialization.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::snapshot::LocalSnapshot;

/// Write-through store for the local garden snapshot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// A store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a snapshot, replacing any previous one.
    ///
    /// Writes to a sibling temp file first and renames it into place so a
    /// crash mid-write never leaves a truncated snapshot behind.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from writing or renaming.
    pub fn save(&self, snapshot: &LocalSnapshot) -> io::Result<()> {
        let json = serde_json::to_string(snapshot).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    /// Load the stored snapshot as a raw JSON value for [`crate::snapshot::decode`].
    ///
    /// Returns `None` when there is no usable snapshot for any reason.
    #[must_use]
    pub fn load(&self) -> Option<serde_json::Value> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}
