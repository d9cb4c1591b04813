//! Repository factory for dependency injection.
//!
//! Creates the repository selected by environment or configuration file and
//! hands it out as `Arc<dyn FullRepository>`.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use super::seed::SeedData;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Unset means `Local`; an unknown value is an error.
    pub fn from_env() -> Result<Self, RepositoryError> {
        match std::env::var("REPOSITORY_TYPE") {
            Ok(val) => val.parse().map_err(RepositoryError::configuration),
            Err(_) => Ok(Self::Local),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use rig_inspect::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Local, None);
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type, optionally preloaded.
    pub fn create(repo_type: RepositoryType, seed: Option<SeedData>) -> Arc<dyn FullRepository> {
        match repo_type {
            RepositoryType::Local => match seed {
                Some(seed) => Arc::new(LocalRepository::with_seed(seed)),
                None => Self::create_local(),
            },
        }
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration (`REPOSITORY_TYPE`).
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = RepositoryType::from_env()?;
        Ok(Self::create(repo_type, None))
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// `Ok(None)` when no `repository.toml` exists; a broken one is an error.
    pub fn from_default_config() -> RepositoryResult<Option<Arc<dyn FullRepository>>> {
        Self::from_config_search(Path::new("."))
    }

    /// Create repository from the first `repository.toml` found under `base`.
    pub fn from_config_search(base: &Path) -> RepositoryResult<Option<Arc<dyn FullRepository>>> {
        RepositoryConfig::find_in(base)?
            .map(|config| Self::from_repository_config(&config))
            .transpose()
    }

    /// Create repository from a RepositoryConfig instance, loading its seed.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let seed = config.load_seed()?;
        if let Some(ref seed) = seed {
            log::info!(
                "Seeding repository with {} inspection(s), {} rig(s), {} inspector(s)",
                seed.inspections.len(),
                seed.rigs.len(),
                seed.inspectors.len()
            );
        }
        Ok(Self::create(repo_type, seed))
    }
}
