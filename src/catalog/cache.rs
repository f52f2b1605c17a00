//! # Catalog Cache
//!
//! Keeps the last successfully fetched catalog at `~/.telly/catalog.json` so
//! the lists are populated immediately on startup, and stay usable when the
//! media server is unreachable.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::types::MediaInfo;

/// On-disk cache document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CachedCatalog {
    /// Unix timestamp of the fetch that produced `media`.
    pub fetched_at: i64,
    pub media: MediaInfo,
}

/// Returns `~/.telly/catalog.json`.
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".telly").join("catalog.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Save a catalog, stamped with the current time.
pub fn save(path: &Path, media: &MediaInfo) -> io::Result<()> {
    let cached = CachedCatalog {
        fetched_at: Utc::now().timestamp(),
        media: media.clone(),
    };
    atomic_write_json(path, &cached)?;
    debug!("Catalog cached at {}", path.display());
    Ok(())
}

/// Load the cached catalog. `Ok(None)` when nothing has been cached yet.
pub fn load(path: &Path) -> io::Result<Option<CachedCatalog>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let cached: CachedCatalog =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!(
        "Loaded cached catalog from {} (fetched_at={})",
        path.display(),
        cached.fetched_at
    );
    Ok(Some(cached))
}
