//! Persistence for the user's [`GridLevels`].
//!
//! State is stored as the serde JSON image of `GridLevels` under a string key.
//! Loading never blocks the editor: a missing or unreadable entry falls back to
//! the defaults, and a failed save is logged and otherwise ignored.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde_json::json;
use thiserror::Error;

use crate::layout::GridLevels;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};

pub const DEFAULT_STORAGE_KEY: &str = "mouseless-grid-levels";

const LOG_TARGET: &str = "mouseless::storage";

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed stored levels: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

/// Key/value store for grid levels.
pub trait LevelStore {
    fn load(&self, key: &str) -> StorageResult<Option<GridLevels>>;
    fn save(&self, key: &str, levels: &GridLevels) -> StorageResult<()>;
}

/// One pretty-printed JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl LevelStore for FileStore {
    fn load(&self, key: &str) -> StorageResult<Option<GridLevels>> {
        let path = self.path_for(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, key: &str, levels: &GridLevels) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_string_pretty(levels)?)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}

/// In-process store, keyed like [`FileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload, bypassing serialization.
    pub fn insert_raw(&self, key: &str, payload: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), payload.into());
    }
}

impl LevelStore for MemoryStore {
    fn load(&self, key: &str) -> StorageResult<Option<GridLevels>> {
        validate_key(key)?;
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, levels: &GridLevels) -> StorageResult<()> {
        validate_key(key)?;
        let payload = serde_json::to_string(levels)?;
        self.insert_raw(key, payload);
        Ok(())
    }
}

/// Load stored levels, falling back to [`GridLevels::default`] when nothing
/// is stored or the stored entry cannot be read.
pub fn load_or_default(store: &dyn LevelStore, key: &str, logger: Option<&Logger>) -> GridLevels {
    match store.load(key) {
        Ok(Some(levels)) => levels,
        Ok(None) => {
            log(logger, LogLevel::Debug, "levels_defaulted", key, None);
            GridLevels::default()
        }
        Err(err) => {
            log(logger, LogLevel::Warn, "load_failed", key, Some(&err));
            GridLevels::default()
        }
    }
}

/// Save levels, logging instead of propagating failures. Returns whether the
/// save went through.
pub fn save_logged(
    store: &dyn LevelStore,
    key: &str,
    levels: &GridLevels,
    logger: Option<&Logger>,
) -> bool {
    match store.save(key, levels) {
        Ok(()) => {
            log(logger, LogLevel::Debug, "levels_saved", key, None);
            true
        }
        Err(err) => {
            log(logger, LogLevel::Warn, "save_failed", key, Some(&err));
            false
        }
    }
}

fn log(
    logger: Option<&Logger>,
    level: LogLevel,
    message: &str,
    key: &str,
    err: Option<&StorageError>,
) {
    let Some(logger) = logger else {
        return;
    };
    let mut fields = vec![json_str("key", key)];
    if let Some(err) = err {
        fields.push(json_kv("error", json!(err.to_string())));
    }
    let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
}
