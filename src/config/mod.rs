use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::logging::{FileSink, LogLevel, Logger, NullSink};
use crate::storage::{DEFAULT_STORAGE_KEY, FileStore};

/// Configuration knobs for the editor front-end.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Directory holding persisted levels.
    pub store_dir: PathBuf,
    /// Key the levels are stored under.
    pub storage_key: String,
    /// JSON-lines log file. `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// Log file size that triggers truncation. Zero disables the limit.
    pub log_max_bytes: u64,
    pub log_level: LogLevel,
    /// Style terminal output with colours.
    pub color: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".mouseless-grid"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_path: None,
            log_max_bytes: 1024 * 1024,
            log_level: LogLevel::Info,
            color: true,
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|err| EditorError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.store_dir)
    }

    /// Build the configured logger; without a log path every event is dropped.
    pub fn build_logger(&self) -> Result<Logger> {
        let logger = match &self.log_path {
            Some(path) => Logger::new(FileSink::new(path, self.log_max_bytes)?),
            None => Logger::new(NullSink),
        };
        Ok(logger.with_min_level(self.log_level))
    }
}
