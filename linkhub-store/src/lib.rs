//! JSON file persistence for Linkhub.
//!
//! The whole collection lives in one JSON array on disk. Reads tolerate a
//! missing file (empty collection) and a non-array root (warn and treat as
//! empty); writes go through a sibling temp file and an atomic rename so a
//! crash mid-write never leaves a torn file behind.
//!
//! Concurrency: the store hands out and accepts whole snapshots. Writers in
//! the same process must serialize their read-modify-write cycles
//! themselves (the server holds a mutex across them); across processes the
//! last write wins — an accepted, documented limitation.

mod error;

pub use error::{StoreError, StoreResult};

use linkhub_types::Link;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// File-backed store for the link collection.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given file path. Nothing is touched on
    /// disk until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection.
    ///
    /// A missing file is an empty collection. A file whose JSON root is not
    /// an array is logged and treated as empty rather than failing the
    /// request. Malformed JSON or malformed entries are errors.
    pub async fn load(&self) -> StoreResult<Vec<Link>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let value: serde_json::Value = serde_json::from_str(&raw)?;
        if !value.is_array() {
            warn!(path = %self.path.display(), "links file root is not an array, treating as empty");
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Writes the full collection, replacing whatever was there.
    ///
    /// Parent directories are created as needed. The data is written to a
    /// sibling temp file first and renamed into place.
    pub async fn save(&self, links: &[Link]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(links)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
