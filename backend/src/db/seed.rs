//! JSON fixture used to preload a local repository.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Inspection, Inspector, Rig};

/// Records to preload. Every array is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub inspections: Vec<Inspection>,
    pub rigs: Vec<Rig>,
    pub inspectors: Vec<Inspector>,
}

impl SeedData {
    /// Read a seed fixture from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("load_seed").with_details(path.display().to_string());

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read seed file: {}", e),
                context(),
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to parse seed file: {}", e),
                context(),
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.inspections.is_empty() && self.rigs.is_empty() && self.inspectors.is_empty()
    }
}
