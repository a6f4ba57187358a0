//! Runtime configuration.

use std::path::{Path, PathBuf};

use crate::persistence::FileSnapshotStore;

/// Environment variable naming the data file.
pub const DATA_FILE_ENV: &str = "BAZAAR_DATA_FILE";

/// Data file used when nothing is configured.
pub const DEFAULT_DATA_FILE: &str = "store_data.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_file: PathBuf,
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Read `BAZAAR_DATA_FILE`, falling back to `store_data.txt` in the working
    /// directory.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(DATA_FILE_ENV).ok())
    }

    fn from_var(value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(path) => Self::new(path),
            None => {
                tracing::warn!("{DATA_FILE_ENV} not set; using {DEFAULT_DATA_FILE}");
                Self::new(DEFAULT_DATA_FILE)
            }
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn snapshot_store(&self) -> FileSnapshotStore {
        FileSnapshotStore::new(&self.data_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_falls_back_to_default() {
        assert_eq!(StoreConfig::from_var(None).data_file(), Path::new("store_data.txt"));
        assert_eq!(StoreConfig::from_var(Some("  ".into())), StoreConfig::default());
    }

    #[test]
    fn explicit_path_is_used() {
        let config = StoreConfig::from_var(Some("/var/lib/bazaar/data.txt".into()));
        assert_eq!(config.data_file(), Path::new("/var/lib/bazaar/data.txt"));
        assert_eq!(config.snapshot_store().path(), Path::new("/var/lib/bazaar/data.txt"));
    }
}
