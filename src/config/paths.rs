//! Path management for Spendwise
//!
//! Resolves where configuration and collection files live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWISE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/spendwise` on Linux, `~/Library/Application Support/spendwise`
//!    on macOS, `%APPDATA%\spendwise\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SpendwiseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDWISE_DATA_DIR";

/// Manages all paths used by Spendwise
#[derive(Debug, Clone)]
pub struct SpendwisePaths {
    /// Base directory for all Spendwise data
    base_dir: PathBuf,
}

impl SpendwisePaths {
    /// Create a new SpendwisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `SPENDWISE_DATA_DIR` is not set.
    pub fn new() -> Result<Self, SpendwiseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendwisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one JSON file per collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the file backing a storage key
    pub fn collection_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendwiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendwiseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Spendwise has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendwiseError> {
    ProjectDirs::from("", "", "spendwise")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            SpendwiseError::Config(format!(
                "Could not determine a home directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
