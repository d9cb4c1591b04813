//! High-level repository service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. Handlers never
//! call the repository traits directly, so logging and cross-collection rules
//! live in one place.
//!
//! ```no_run
//! use rig_inspect::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let inspections = services::list_inspections(&repo).await?;
//!     println!("Found {} inspections", inspections.len());
//!     Ok(())
//! }
//! ```

use chrono::Utc;
use log::{debug, info};

use super::repository::{FullRepository, RepositoryResult};
use crate::api::{InspectionId, InspectorId, RigId};
use crate::models::{Inspection, InspectionDraft, Inspector, InspectorDraft, Rig, RigDraft};
use crate::services::filtering::{filter_inspections, FilterCriteria};

// ==================== Health & Connection ====================

/// Check if the repository is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Inspection Operations ====================

pub async fn list_inspections<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Inspection>> {
    repo.list_inspections().await
}

/// List inspections matching `criteria`, evaluated at the current time.
pub async fn list_filtered_inspections<R: FullRepository + ?Sized>(
    repo: &R,
    criteria: &FilterCriteria,
) -> RepositoryResult<Vec<Inspection>> {
    let inspections = repo.list_inspections().await?;
    Ok(filter_inspections(&inspections, criteria, Utc::now()))
}

pub async fn get_inspection<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectionId,
) -> RepositoryResult<Inspection> {
    repo.get_inspection(id).await
}

/// Create an inspection. A rig or inspector name that is not registered is
/// accepted and logged; reports give such rigs their own bucket.
pub async fn create_inspection<R: FullRepository + ?Sized>(
    repo: &R,
    draft: InspectionDraft,
) -> RepositoryResult<Inspection> {
    warn_unknown_references(repo, &draft).await?;
    let inspection = repo.create_inspection(draft).await?;
    info!("Created inspection {} ({})", inspection.id, inspection.title);
    Ok(inspection)
}

pub async fn update_inspection<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectionId,
    draft: InspectionDraft,
) -> RepositoryResult<Inspection> {
    warn_unknown_references(repo, &draft).await?;
    repo.update_inspection(id, draft).await
}

pub async fn delete_inspection<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectionId,
) -> RepositoryResult<Inspection> {
    let removed = repo.delete_inspection(id).await?;
    info!("Deleted inspection {}", removed.id);
    Ok(removed)
}

async fn warn_unknown_references<R: FullRepository + ?Sized>(
    repo: &R,
    draft: &InspectionDraft,
) -> RepositoryResult<()> {
    if !draft.rig.is_empty() {
        let rigs = repo.list_rigs().await?;
        if !rigs.iter().any(|r| r.name == draft.rig) {
            debug!("Inspection references unregistered rig '{}'", draft.rig);
        }
    }
    if !draft.inspectors.is_empty() {
        let known = repo.list_inspectors().await?;
        for name in &draft.inspectors {
            if !known.iter().any(|i| i.name == *name) {
                debug!("Inspection references unregistered inspector '{}'", name);
            }
        }
    }
    Ok(())
}

// ==================== Rig Operations ====================

pub async fn list_rigs<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Rig>> {
    repo.list_rigs().await
}

pub async fn get_rig<R: FullRepository + ?Sized>(repo: &R, id: &RigId) -> RepositoryResult<Rig> {
    repo.get_rig(id).await
}

pub async fn create_rig<R: FullRepository + ?Sized>(
    repo: &R,
    draft: RigDraft,
) -> RepositoryResult<Rig> {
    let rig = repo.create_rig(draft).await?;
    info!("Created rig {} ({})", rig.id, rig.name);
    Ok(rig)
}

pub async fn update_rig<R: FullRepository + ?Sized>(
    repo: &R,
    id: &RigId,
    draft: RigDraft,
) -> RepositoryResult<Rig> {
    repo.update_rig(id, draft).await
}

pub async fn delete_rig<R: FullRepository + ?Sized>(repo: &R, id: &RigId) -> RepositoryResult<Rig> {
    let removed = repo.delete_rig(id).await?;
    info!("Deleted rig {} ({})", removed.id, removed.name);
    Ok(removed)
}

// ==================== Inspector Operations ====================

pub async fn list_inspectors<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Inspector>> {
    repo.list_inspectors().await
}

pub async fn get_inspector<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectorId,
) -> RepositoryResult<Inspector> {
    repo.get_inspector(id).await
}

pub async fn create_inspector<R: FullRepository + ?Sized>(
    repo: &R,
    draft: InspectorDraft,
) -> RepositoryResult<Inspector> {
    let inspector = repo.create_inspector(draft).await?;
    info!("Created inspector {} ({})", inspector.id, inspector.name);
    Ok(inspector)
}

pub async fn update_inspector<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectorId,
    draft: InspectorDraft,
) -> RepositoryResult<Inspector> {
    repo.update_inspector(id, draft).await
}

pub async fn delete_inspector<R: FullRepository + ?Sized>(
    repo: &R,
    id: &InspectorId,
) -> RepositoryResult<Inspector> {
    let removed = repo.delete_inspector(id).await?;
    info!("Deleted inspector {} ({})", removed.id, removed.name);
    Ok(removed)
}
