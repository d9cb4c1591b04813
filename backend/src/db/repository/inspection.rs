//! Inspection repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::InspectionId;
use crate::models::{Inspection, InspectionDraft};

/// Storage operations for inspections.
///
/// Implementations must be `Send + Sync` to be shared across axum handlers.
#[async_trait]
pub trait InspectionRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backing store is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Inspection Operations ====================

    /// List every inspection in insertion order.
    async fn list_inspections(&self) -> RepositoryResult<Vec<Inspection>>;

    /// Fetch one inspection.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if no inspection has this id.
    async fn get_inspection(&self, id: &InspectionId) -> RepositoryResult<Inspection>;

    /// Validate and store a new inspection, assigning its id and `createdAt`.
    async fn create_inspection(&self, draft: InspectionDraft) -> RepositoryResult<Inspection>;

    /// Replace the editable fields of an existing inspection.
    ///
    /// `id` and `createdAt` are preserved.
    async fn update_inspection(
        &self,
        id: &InspectionId,
        draft: InspectionDraft,
    ) -> RepositoryResult<Inspection>;

    /// Remove an inspection and return it.
    async fn delete_inspection(&self, id: &InspectionId) -> RepositoryResult<Inspection>;
}
