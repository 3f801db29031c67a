// Storage configuration

use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory beneath which every write is confined.
    /// Created on writer construction if absent.
    pub output_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_root: std::env::temp_dir().join("toolgate-out"),
        }
    }
}

impl StorageConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(root) = std::env::var("TOOLGATE_OUTPUT_ROOT") {
            if !root.is_empty() {
                config.output_root = PathBuf::from(root);
            }
        }
        config
    }
}
