//! Rig repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::RigId;
use crate::models::{Rig, RigDraft};

/// Storage operations for rigs.
#[async_trait]
pub trait RigRepository: Send + Sync {
    /// List every rig in insertion order.
    async fn list_rigs(&self) -> RepositoryResult<Vec<Rig>>;

    async fn get_rig(&self, id: &RigId) -> RepositoryResult<Rig>;

    /// Store a new rig.
    ///
    /// # Errors
    /// `RepositoryError::Conflict` if another rig already has this name.
    async fn create_rig(&self, draft: RigDraft) -> RepositoryResult<Rig>;

    /// Update a rig. A name change is propagated to inspections that
    /// referenced the old name.
    async fn update_rig(&self, id: &RigId, draft: RigDraft) -> RepositoryResult<Rig>;

    /// Remove a rig. Inspections that reference it are left untouched.
    async fn delete_rig(&self, id: &RigId) -> RepositoryResult<Rig>;
}
