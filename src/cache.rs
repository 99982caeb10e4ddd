//! On-disk cache for fetched schedule data.
//!
//! The upstream source returns roughly a month of records at a time, so
//! both drivers work from a JSON cache under the XDG data directory
//! instead of fetching on every start. Raw wire records are stored
//! untouched - the typed schedule (and any adjustments) are re-derived on
//! load, never persisted.
//!
//! Writes go through a temp file in the target directory and a rename, so
//! a crash mid-write can never leave a truncated cache behind.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::CACHE_MAX_AGE_SECS;
use crate::provider::RawDay;

/// The persisted cache payload: which city, when fetched, and the raw
/// records exactly as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedTimes {
    pub city_id: String,
    /// Unix timestamp (seconds) of the fetch.
    pub fetched_at: i64,
    pub days: Vec<RawDay>,
}

impl CachedTimes {
    /// True when the data is older than the freshness window (2 days) or
    /// belongs to a different city than currently configured.
    pub fn is_stale(&self, city_id: &str, now_ts: i64) -> bool {
        self.city_id != city_id || now_ts - self.fetched_at > CACHE_MAX_AGE_SECS
    }
}

/// File-backed schedule cache.
pub struct ScheduleCache {
    path: PathBuf,
}

impl ScheduleCache {
    /// Cache at the default location under the XDG data directory.
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir().context("Could not determine data directory")?;
        Ok(Self {
            path: base.join("vakitler").join("times.json"),
        })
    }

    /// Cache at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached payload, or `None` when no cache exists yet.
    /// A present-but-unreadable cache is an error, not silence.
    pub fn load(&self) -> Result<Option<CachedTimes>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache from {}", self.path.display()))?;
        let cached = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache at {}", self.path.display()))?;
        Ok(Some(cached))
    }

    /// Atomically replace the cache with a new payload.
    pub fn store(&self, cached: &CachedTimes) -> Result<()> {
        let parent = self
            .path
            .parent()
            .context("Cache path has no parent directory")?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;

        let contents = serde_json::to_string(cached).context("Failed to serialize cache")?;
        let temp = tempfile::NamedTempFile::new_in(parent)
            .context("Failed to create temporary cache file")?;
        std::fs::write(temp.path(), contents).context("Failed to write temporary cache file")?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace cache at {}", self.path.display()))?;
        Ok(())
    }
}
