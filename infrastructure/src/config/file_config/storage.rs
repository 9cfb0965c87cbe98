//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding the answer slot. `None` uses the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Directory to use: the configured one, else `<data dir>/madori`,
    /// else `./.madori`
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("madori"))
                .unwrap_or_else(|| PathBuf::from(".madori"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = FileStorageConfig {
            data_dir: Some(PathBuf::from("/tmp/madori-test")),
        };
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/tmp/madori-test"));
    }

    #[test]
    fn test_default_data_dir_is_namespaced() {
        let dir = FileStorageConfig::default().resolve_data_dir();
        assert!(dir.to_string_lossy().contains("madori"));
    }
}
