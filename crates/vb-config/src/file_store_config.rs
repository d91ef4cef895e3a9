use crate::DEFAULT_FILE_STORE_FILENAME;

use serde::Deserialize;

/// Location of the legacy line-oriented vouch file, kept around so the
/// one-shot `/migrate` import can find it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Filename, relative to the config directory.
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_FILE_STORE_FILENAME),
        }
    }
}
