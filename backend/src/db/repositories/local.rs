//! In-memory local repository implementation.
//!
//! All collections live in `Vec`s behind a single `parking_lot::RwLock`, so
//! list operations return snapshots in insertion order and a rename cascade
//! is applied atomically with the rename itself.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::{InspectionId, InspectorId, RigId};
use crate::db::repository::*;
use crate::db::seed::SeedData;
use crate::models::{Inspection, InspectionDraft, Inspector, InspectorDraft, Rig, RigDraft};

/// In-memory local repository.
///
/// Cloning is cheap and every clone shares the same data.
///
/// # Example
/// ```
/// use rig_inspect::db::repositories::LocalRepository;
/// use rig_inspect::db::repository::RigRepository;
/// use rig_inspect::models::RigDraft;
///
/// # tokio_test_block_on(async {
/// let repo = LocalRepository::new();
/// repo.create_rig(RigDraft { name: "Rig A".into(), location: "North Sea".into() })
///     .await
///     .unwrap();
/// assert_eq!(repo.rig_count(), 1);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    inspections: Vec<Inspection>,
    rigs: Vec<Rig>,
    inspectors: Vec<Inspector>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            inspections: Vec::new(),
            rigs: Vec::new(),
            inspectors: Vec::new(),
            is_healthy: true,
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository preloaded with `seed`.
    pub fn with_seed(seed: SeedData) -> Self {
        let repo = Self::new();
        repo.seed(seed);
        repo
    }

    /// Append seed records as-is. Records without an id get a generated one.
    pub fn seed(&self, seed: SeedData) {
        let SeedData {
            inspections,
            rigs,
            inspectors,
        } = seed;

        let mut data = self.data.write();
        data.rigs.extend(rigs.into_iter().map(|mut rig| {
            if rig.id.is_empty() {
                rig.id = RigId::generate();
            }
            rig
        }));
        data.inspectors
            .extend(inspectors.into_iter().map(|mut inspector| {
                if inspector.id.is_empty() {
                    inspector.id = InspectorId::generate();
                }
                inspector
            }));
        data.inspections
            .extend(inspections.into_iter().map(|mut inspection| {
                if inspection.id.is_empty() {
                    inspection.id = InspectionId::generate();
                }
                inspection
            }));

        log::debug!(
            "LocalRepository seeded: {} inspection(s), {} rig(s), {} inspector(s)",
            data.inspections.len(),
            data.rigs.len(),
            data.inspectors.len()
        );
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn inspection_count(&self) -> usize {
        self.data.read().inspections.len()
    }

    pub fn rig_count(&self) -> usize {
        self.data.read().rigs.len()
    }

    pub fn inspector_count(&self) -> usize {
        self.data.read().inspectors.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Repository is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(operation: &str, entity: &str, id: impl ToString) -> RepositoryError {
    let id = id.to_string();
    RepositoryError::not_found_with_context(
        format!("{} {} not found", entity, id),
        ErrorContext::new(operation)
            .with_entity(entity)
            .with_entity_id(id),
    )
}

fn invalid(operation: &str, entity: &str, message: String) -> RepositoryError {
    RepositoryError::validation_with_context(
        message,
        ErrorContext::new(operation).with_entity(entity),
    )
}

fn duplicate_name(operation: &str, entity: &str, name: &str) -> RepositoryError {
    RepositoryError::conflict_with_context(
        format!("{} named '{}' already exists", entity, name),
        ErrorContext::new(operation)
            .with_entity(entity)
            .with_details(format!("name={}", name)),
    )
}

// ==================== Inspections ====================

#[async_trait]
impl InspectionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_inspections(&self) -> RepositoryResult<Vec<Inspection>> {
        self.check_health("list_inspections")?;
        Ok(self.data.read().inspections.clone())
    }

    async fn get_inspection(&self, id: &InspectionId) -> RepositoryResult<Inspection> {
        self.check_health("get_inspection")?;
        self.data
            .read()
            .inspections
            .iter()
            .find(|i| i.id == *id)
            .cloned()
            .ok_or_else(|| not_found("get_inspection", "inspection", id))
    }

    async fn create_inspection(&self, draft: InspectionDraft) -> RepositoryResult<Inspection> {
        self.check_health("create_inspection")?;
        draft
            .validate()
            .map_err(|e| invalid("create_inspection", "inspection", e))?;

        let inspection = Inspection::from_draft(InspectionId::generate(), now_timestamp(), draft);
        self.data.write().inspections.push(inspection.clone());
        log::debug!("Created inspection {} on rig '{}'", inspection.id, inspection.rig);
        Ok(inspection)
    }

    async fn update_inspection(
        &self,
        id: &InspectionId,
        draft: InspectionDraft,
    ) -> RepositoryResult<Inspection> {
        self.check_health("update_inspection")?;
        draft
            .validate()
            .map_err(|e| invalid("update_inspection", "inspection", e))?;

        let mut data = self.data.write();
        let inspection = data
            .inspections
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| not_found("update_inspection", "inspection", id))?;
        inspection.apply_draft(draft);
        log::debug!("Updated inspection {}", id);
        Ok(inspection.clone())
    }

    async fn delete_inspection(&self, id: &InspectionId) -> RepositoryResult<Inspection> {
        self.check_health("delete_inspection")?;
        let mut data = self.data.write();
        let index = data
            .inspections
            .iter()
            .position(|i| i.id == *id)
            .ok_or_else(|| not_found("delete_inspection", "inspection", id))?;
        log::debug!("Deleted inspection {}", id);
        Ok(data.inspections.remove(index))
    }
}

// ==================== Rigs ====================

#[async_trait]
impl RigRepository for LocalRepository {
    async fn list_rigs(&self) -> RepositoryResult<Vec<Rig>> {
        self.check_health("list_rigs")?;
        Ok(self.data.read().rigs.clone())
    }

    async fn get_rig(&self, id: &RigId) -> RepositoryResult<Rig> {
        self.check_health("get_rig")?;
        self.data
            .read()
            .rigs
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or_else(|| not_found("get_rig", "rig", id))
    }

    async fn create_rig(&self, draft: RigDraft) -> RepositoryResult<Rig> {
        self.check_health("create_rig")?;
        draft.validate().map_err(|e| invalid("create_rig", "rig", e))?;

        let mut data = self.data.write();
        if data.rigs.iter().any(|r| r.name == draft.name) {
            return Err(duplicate_name("create_rig", "rig", &draft.name));
        }
        let rig = Rig {
            id: RigId::generate(),
            name: draft.name,
            location: draft.location,
        };
        data.rigs.push(rig.clone());
        log::debug!("Created rig {} '{}'", rig.id, rig.name);
        Ok(rig)
    }

    async fn update_rig(&self, id: &RigId, draft: RigDraft) -> RepositoryResult<Rig> {
        self.check_health("update_rig")?;
        draft.validate().map_err(|e| invalid("update_rig", "rig", e))?;

        let mut data = self.data.write();
        if data.rigs.iter().any(|r| r.name == draft.name && r.id != *id) {
            return Err(duplicate_name("update_rig", "rig", &draft.name));
        }
        let index = data
            .rigs
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| not_found("update_rig", "rig", id))?;

        let old_name = std::mem::replace(&mut data.rigs[index].name, draft.name);
        data.rigs[index].location = draft.location;
        let new_name = data.rigs[index].name.clone();

        if old_name != new_name {
            let mut renamed = 0usize;
            for inspection in data.inspections.iter_mut().filter(|i| i.rig == old_name) {
                inspection.rig = new_name.clone();
                renamed += 1;
            }
            log::debug!(
                "Renamed rig '{}' -> '{}', {} inspection(s) updated",
                old_name,
                new_name,
                renamed
            );
        }

        Ok(data.rigs[index].clone())
    }

    async fn delete_rig(&self, id: &RigId) -> RepositoryResult<Rig> {
        self.check_health("delete_rig")?;
        let mut data = self.data.write();
        let index = data
            .rigs
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| not_found("delete_rig", "rig", id))?;
        log::debug!("Deleted rig {}", id);
        Ok(data.rigs.remove(index))
    }
}

// ==================== Inspectors ====================

#[async_trait]
impl InspectorRepository for LocalRepository {
    async fn list_inspectors(&self) -> RepositoryResult<Vec<Inspector>> {
        self.check_health("list_inspectors")?;
        Ok(self.data.read().inspectors.clone())
    }

    async fn get_inspector(&self, id: &InspectorId) -> RepositoryResult<Inspector> {
        self.check_health("get_inspector")?;
        self.data
            .read()
            .inspectors
            .iter()
            .find(|i| i.id == *id)
            .cloned()
            .ok_or_else(|| not_found("get_inspector", "inspector", id))
    }

    async fn create_inspector(&self, draft: InspectorDraft) -> RepositoryResult<Inspector> {
        self.check_health("create_inspector")?;
        draft
            .validate()
            .map_err(|e| invalid("create_inspector", "inspector", e))?;

        let mut data = self.data.write();
        if data.inspectors.iter().any(|i| i.name == draft.name) {
            return Err(duplicate_name("create_inspector", "inspector", &draft.name));
        }
        let inspector = Inspector {
            id: InspectorId::generate(),
            name: draft.name,
            specialties: draft.specialties,
        };
        data.inspectors.push(inspector.clone());
        log::debug!("Created inspector {} '{}'", inspector.id, inspector.name);
        Ok(inspector)
    }

    async fn update_inspector(
        &self,
        id: &InspectorId,
        draft: InspectorDraft,
    ) -> RepositoryResult<Inspector> {
        self.check_health("update_inspector")?;
        draft
            .validate()
            .map_err(|e| invalid("update_inspector", "inspector", e))?;

        let mut data = self.data.write();
        if data
            .inspectors
            .iter()
            .any(|i| i.name == draft.name && i.id != *id)
        {
            return Err(duplicate_name("update_inspector", "inspector", &draft.name));
        }
        let index = data
            .inspectors
            .iter()
            .position(|i| i.id == *id)
            .ok_or_else(|| not_found("update_inspector", "inspector", id))?;

        let old_name = std::mem::replace(&mut data.inspectors[index].name, draft.name);
        data.inspectors[index].specialties = draft.specialties;
        let new_name = data.inspectors[index].name.clone();

        if old_name != new_name {
            let mut renamed = 0usize;
            for name in data
                .inspections
                .iter_mut()
                .flat_map(|i| i.inspectors.iter_mut())
                .filter(|n| **n == old_name)
            {
                *name = new_name.clone();
                renamed += 1;
            }
            log::debug!(
                "Renamed inspector '{}' -> '{}', {} assignment(s) updated",
                old_name,
                new_name,
                renamed
            );
        }

        Ok(data.inspectors[index].clone())
    }

    async fn delete_inspector(&self, id: &InspectorId) -> RepositoryResult<Inspector> {
        self.check_health("delete_inspector")?;
        let mut data = self.data.write();
        let index = data
            .inspectors
            .iter()
            .position(|i| i.id == *id)
            .ok_or_else(|| not_found("delete_inspector", "inspector", id))?;
        log::debug!("Deleted inspector {}", id);
        Ok(data.inspectors.remove(index))
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod local_tests;
