//! Inspector repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::InspectorId;
use crate::models::{Inspector, InspectorDraft};

/// Storage operations for inspectors.
#[async_trait]
pub trait InspectorRepository: Send + Sync {
    async fn list_inspectors(&self) -> RepositoryResult<Vec<Inspector>>;

    async fn get_inspector(&self, id: &InspectorId) -> RepositoryResult<Inspector>;

    /// Store a new inspector.
    ///
    /// # Errors
    /// `RepositoryError::Conflict` if another inspector already has this name.
    async fn create_inspector(&self, draft: InspectorDraft) -> RepositoryResult<Inspector>;

    /// Update an inspector. A name change is propagated to the `inspectors`
    /// lists of existing inspections.
    async fn update_inspector(
        &self,
        id: &InspectorId,
        draft: InspectorDraft,
    ) -> RepositoryResult<Inspector>;

    async fn delete_inspector(&self, id: &InspectorId) -> RepositoryResult<Inspector>;
}
