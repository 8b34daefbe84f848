//! Durable match record cache
//!
//! A flat directory of JSON files keyed by match id. Existence of an entry
//! is the only idempotence signal: no content hashing, no versioning, no
//! TTL. Match records are immutable upstream, so an entry never needs
//! refreshing once written.

use crate::constants::CACHE_ENTRY_SUFFIX;
use crate::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Directory-backed key/value store for fetched match records.
#[derive(Debug, Clone)]
pub struct MatchCache {
    dir: PathBuf,
}

impl MatchCache {
    /// Opens the cache rooted at `dir`, creating the directory if absent.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!("Match cache at {}", dir.display());
        Ok(MatchCache { dir })
    }

    /// Cache entry key for a match id.
    pub fn entry_key(match_id: &str) -> String {
        format!("{match_id}{CACHE_ENTRY_SUFFIX}")
    }

    /// True iff a file named exactly `key` exists in the cache directory.
    pub async fn exists(&self, key: &str) -> bool {
        fs::try_exists(self.dir.join(key)).await.unwrap_or(false)
    }

    /// Writes `contents` as the full content of the entry, creating or
    /// truncating it.
    ///
    /// The write is a single `fs::write` call, not a write-to-temp-then-
    /// rename: a crash mid-write can leave a truncated entry that a later
    /// run treats as a hit. Accepted limitation; delete the file and rerun.
    pub async fn store(&self, key: &str, contents: &str) -> Result<(), AppError> {
        fs::write(self.dir.join(key), contents).await?;
        debug!("Stored cache entry '{}'", key);
        Ok(())
    }

    /// Reads the full content of an entry at `path`.
    pub async fn read(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path).await?)
    }

    /// Paths of all regular files directly under the cache directory, in
    /// unspecified order.
    pub async fn entries(&self) -> Result<Vec<PathBuf>, AppError> {
        let mut paths = Vec::new();
        let mut dir = fs::read_dir(&self.dir).await?;
        while let Some(entry) = dir.next_entry().await? {
            if entry.file_type().await?.is_file() {
                paths.push(entry.path());
            }
        }
        Ok(paths)
    }

    /// The directory backing this cache.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
