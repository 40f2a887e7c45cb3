//! Versioned character snapshots on disk.

use crate::character::Character;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Format version written into every snapshot.
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// Default directory snapshots are written under.
pub const DEFAULT_SAVE_DIR: &str = "saves";

/// Snapshot writing or reading error.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to access save file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse save file: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("no saves found for '{0}'")]
    NoSaves(String),
    #[error("save format {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// One snapshot as written to disk.
///
/// The `version` field is the migration hook: a reader refuses files
/// newer than it understands instead of misreading them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub character: Character,
}

/// Writes and reads timestamped snapshots under a root directory.
///
/// Each save is a fresh file at `root/<name>/<name>_<stamp>.json`. The
/// stamp is fixed width, so file-name order is chronological order and
/// the newest snapshot is the lexicographic maximum. Saves that land on
/// an already-taken stamp get a numeric suffix instead of replacing the
/// existing file.
#[derive(Debug, Clone)]
pub struct SaveManager {
    root: PathBuf,
}

impl SaveManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SaveManager { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn character_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// First unused snapshot path for this stamp.
    ///
    /// Two saves in the same instant would share a stamp; the later one
    /// gets a `_<n>` suffix rather than replacing the earlier file. `.`
    /// sorts before `_`, so a suffixed file still lists as the newer
    /// snapshot.
    fn snapshot_path(&self, name: &str, stamp: &str) -> PathBuf {
        let dir = self.character_dir(name);
        let mut path = dir.join(format!("{}_{}.json", name, stamp));
        let mut serial = 1;
        while path.exists() {
            path = dir.join(format!("{}_{}_{}.json", name, stamp, serial));
            serial += 1;
        }
        path
    }

    /// Write a new snapshot, creating directories as needed. Nothing is
    /// overwritten; every save adds a file.
    pub fn save(&self, character: &Character) -> Result<PathBuf, SaveError> {
        let dir = self.character_dir(&character.name);
        fs::create_dir_all(&dir)?;

        let now = Utc::now();
        let stamp = now.format("%Y%m%dT%H%M%S%9f").to_string();
        let path = self.snapshot_path(&character.name, &stamp);

        let snapshot = SaveFile {
            version: SAVE_FORMAT_VERSION,
            saved_at: now,
            character: character.clone(),
        };
        fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(path)
    }

    /// All snapshot paths for a character, newest first.
    pub fn list_saves(&self, name: &str) -> Result<Vec<PathBuf>, SaveError> {
        let dir = self.character_dir(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
            .collect();
        paths.sort();
        paths.reverse();
        Ok(paths)
    }

    /// Load the most recent snapshot for a character.
    pub fn load_latest(&self, name: &str) -> Result<Character, SaveError> {
        let latest = self
            .list_saves(name)?
            .into_iter()
            .next()
            .ok_or_else(|| SaveError::NoSaves(name.to_string()))?;
        let raw = fs::read_to_string(&latest)?;
        let snapshot: SaveFile = serde_json::from_str(&raw)?;
        if snapshot.version > SAVE_FORMAT_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: snapshot.version,
                supported: SAVE_FORMAT_VERSION,
            });
        }
        Ok(snapshot.character)
    }
}

impl Default for SaveManager {
    fn default() -> Self {
        SaveManager::new(DEFAULT_SAVE_DIR)
    }
}
