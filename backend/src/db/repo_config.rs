//! Repository configuration file support.
//!
//! ```toml
//! [repository]
//! type = "local"
//!
//! [seed]
//! path = "fixtures/seed.json"
//! ```
//!
//! A relative seed path is resolved against the directory of the config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use super::seed::SeedData;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub seed: Option<SeedSettings>,
    /// Directory of the file this config was read from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Optional fixture preloaded into the repository at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSettings {
    pub path: PathBuf,
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Candidate config locations relative to `base`, in search order.
    pub fn search_paths(base: &Path) -> [PathBuf; 3] {
        [
            base.join("repository.toml"),
            base.join("backend").join("repository.toml"),
            base.join("..").join("repository.toml"),
        ]
    }

    /// Load the first `repository.toml` found under `base`.
    ///
    /// `Ok(None)` means no file exists. A file that exists but cannot be read
    /// or parsed is an error.
    pub fn find_in(base: &Path) -> Result<Option<Self>, RepositoryError> {
        match Self::search_paths(base).into_iter().find(|p| p.is_file()) {
            Some(path) => {
                log::info!("Using repository config {}", path.display());
                Self::from_file(&path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Option<Self>, RepositoryError> {
        Self::find_in(Path::new("."))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Seed file path, resolved against the config file's directory.
    pub fn seed_path(&self) -> Option<PathBuf> {
        let seed = self.seed.as_ref()?;
        if seed.path.is_absolute() {
            return Some(seed.path.clone());
        }
        Some(match self.base_dir {
            Some(ref dir) => dir.join(&seed.path),
            None => seed.path.clone(),
        })
    }

    /// Load the seed fixture, if one is configured.
    pub fn load_seed(&self) -> Result<Option<SeedData>, RepositoryError> {
        self.seed_path().map(SeedData::from_file).transpose()
    }
}
