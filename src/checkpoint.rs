//! Resume checkpoint — a small JSON document that lets a restarted sweep
//! continue where the previous run stopped instead of starting over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CheckpointError, Result};

/// The persisted progress document.
///
/// External field names (`i`, `star-count`) are part of the on-disk format;
/// documents written by earlier versions of the sweep still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepCheckpoint {
    /// Next catalog number to request
    #[serde(rename = "i")]
    pub next: u32,

    /// Inclusive upper bound of the sweep this document belongs to
    #[serde(rename = "star-count")]
    pub star_count: u32,

    /// When the document was last written; absent in legacy documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SweepCheckpoint {
    /// Fresh document for a sweep that has not requested anything yet.
    pub fn fresh(star_count: u32) -> Self {
        Self {
            next: 1,
            star_count,
            updated_at: Some(Utc::now()),
        }
    }

    /// Record that every number up to and including `requested` has been
    /// processed.
    ///
    /// Progress derives from the requested cursor, never from anything a
    /// response claims about itself.
    pub fn advance_past(&mut self, requested: u32) {
        self.next = requested + 1;
    }

    /// True when every number of the plan has been requested.
    pub fn is_complete(&self) -> bool {
        self.next > self.star_count
    }
}

/// Loads and persists [`SweepCheckpoint`] documents at a fixed path.
#[derive(Debug)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    /// Create a store for the given path. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document.
    ///
    /// A missing file is `Ok(None)`. A file that exists but cannot be
    /// interpreted, or whose cursor or bound is zero, is
    /// [`CheckpointError::Corrupt`]: resuming from a guessed position could
    /// silently redo or skip work.
    pub fn load(&self) -> Result<Option<SweepCheckpoint>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let checkpoint: SweepCheckpoint =
            serde_json::from_slice(&bytes).map_err(|e| CheckpointError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if checkpoint.next == 0 {
            return Err(CheckpointError::Corrupt {
                path: self.path.clone(),
                reason: "cursor is zero; the catalog starts at 1".to_string(),
            }
            .into());
        }
        if checkpoint.star_count == 0 {
            return Err(CheckpointError::Corrupt {
                path: self.path.clone(),
                reason: "star-count is zero".to_string(),
            }
            .into());
        }

        Ok(Some(checkpoint))
    }

    /// Load the persisted document, or start a fresh one when none exists.
    ///
    /// The fresh document is written immediately so the sweep is resumable
    /// from its very first request; a failure to write it is logged and does
    /// not block the run.
    pub fn load_or_init(&self, star_count: u32) -> Result<SweepCheckpoint> {
        if let Some(checkpoint) = self.load()? {
            return Ok(checkpoint);
        }

        let fresh = SweepCheckpoint::fresh(star_count);
        if let Err(e) = self.persist(&fresh) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to write initial checkpoint"
            );
        }
        Ok(fresh)
    }

    /// Overwrite the document wholesale, stamping the write time.
    ///
    /// Parent directories are created as needed.
    pub fn persist(&self, checkpoint: &SweepCheckpoint) -> Result<()> {
        let document = SweepCheckpoint {
            updated_at: Some(Utc::now()),
            ..checkpoint.clone()
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
