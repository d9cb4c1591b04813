//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the db
//! service layer and the analytics services.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{BreakdownResponse, FilterQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    FilterCriteria, Inspection, InspectionDraft, InspectionId, Inspector, InspectorDraft,
    InspectorId, MonthlyStat, ReportData, Rig, RigDraft, RigId, RigPerformance,
};
use crate::db::services as db_services;
use crate::services::{self, breakdown, monthly, reports};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for handlers that create a resource.
pub type CreatedResult<T> = Result<(StatusCode, Json<T>), AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository,
    }))
}

// =============================================================================
// Inspections
// =============================================================================

/// GET /api/inspections
///
/// List inspections, narrowed by any filter query parameters.
pub async fn list_inspections(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<Inspection>> {
    let criteria = FilterCriteria::try_from(query)?;
    let inspections =
        db_services::list_filtered_inspections(state.repository.as_ref(), &criteria).await?;
    Ok(Json(inspections))
}

/// POST /api/inspections
pub async fn create_inspection(
    State(state): State<AppState>,
    Json(draft): Json<InspectionDraft>,
) -> CreatedResult<Inspection> {
    let inspection = db_services::create_inspection(state.repository.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(inspection)))
}

/// GET /api/inspections/{id}
pub async fn get_inspection(
    State(state): State<AppState>,
    Path(id): Path<InspectionId>,
) -> HandlerResult<Inspection> {
    Ok(Json(
        db_services::get_inspection(state.repository.as_ref(), &id).await?,
    ))
}

/// PUT /api/inspections/{id}
pub async fn update_inspection(
    State(state): State<AppState>,
    Path(id): Path<InspectionId>,
    Json(draft): Json<InspectionDraft>,
) -> HandlerResult<Inspection> {
    Ok(Json(
        db_services::update_inspection(state.repository.as_ref(), &id, draft).await?,
    ))
}

/// DELETE /api/inspections/{id}
pub async fn delete_inspection(
    State(state): State<AppState>,
    Path(id): Path<InspectionId>,
) -> HandlerResult<Inspection> {
    Ok(Json(
        db_services::delete_inspection(state.repository.as_ref(), &id).await?,
    ))
}

// =============================================================================
// Rigs
// =============================================================================

/// GET /api/rigs
pub async fn list_rigs(State(state): State<AppState>) -> HandlerResult<Vec<Rig>> {
    Ok(Json(db_services::list_rigs(state.repository.as_ref()).await?))
}

/// POST /api/rigs
pub async fn create_rig(
    State(state): State<AppState>,
    Json(draft): Json<RigDraft>,
) -> CreatedResult<Rig> {
    let rig = db_services::create_rig(state.repository.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(rig)))
}

/// GET /api/rigs/{id}
pub async fn get_rig(
    State(state): State<AppState>,
    Path(id): Path<RigId>,
) -> HandlerResult<Rig> {
    Ok(Json(db_services::get_rig(state.repository.as_ref(), &id).await?))
}

/// PUT /api/rigs/{id}
///
/// Renaming a rig also renames it on every inspection that referenced it.
pub async fn update_rig(
    State(state): State<AppState>,
    Path(id): Path<RigId>,
    Json(draft): Json<RigDraft>,
) -> HandlerResult<Rig> {
    Ok(Json(
        db_services::update_rig(state.repository.as_ref(), &id, draft).await?,
    ))
}

/// DELETE /api/rigs/{id}
pub async fn delete_rig(
    State(state): State<AppState>,
    Path(id): Path<RigId>,
) -> HandlerResult<Rig> {
    Ok(Json(db_services::delete_rig(state.repository.as_ref(), &id).await?))
}

// =============================================================================
// Inspectors
// =============================================================================

/// GET /api/inspectors
pub async fn list_inspectors(State(state): State<AppState>) -> HandlerResult<Vec<Inspector>> {
    Ok(Json(
        db_services::list_inspectors(state.repository.as_ref()).await?,
    ))
}

/// POST /api/inspectors
pub async fn create_inspector(
    State(state): State<AppState>,
    Json(draft): Json<InspectorDraft>,
) -> CreatedResult<Inspector> {
    let inspector = db_services::create_inspector(state.repository.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(inspector)))
}

/// GET /api/inspectors/{id}
pub async fn get_inspector(
    State(state): State<AppState>,
    Path(id): Path<InspectorId>,
) -> HandlerResult<Inspector> {
    Ok(Json(
        db_services::get_inspector(state.repository.as_ref(), &id).await?,
    ))
}

/// PUT /api/inspectors/{id}
pub async fn update_inspector(
    State(state): State<AppState>,
    Path(id): Path<InspectorId>,
    Json(draft): Json<InspectorDraft>,
) -> HandlerResult<Inspector> {
    Ok(Json(
        db_services::update_inspector(state.repository.as_ref(), &id, draft).await?,
    ))
}

/// DELETE /api/inspectors/{id}
pub async fn delete_inspector(
    State(state): State<AppState>,
    Path(id): Path<InspectorId>,
) -> HandlerResult<Inspector> {
    Ok(Json(
        db_services::delete_inspector(state.repository.as_ref(), &id).await?,
    ))
}

// =============================================================================
// Reports
// =============================================================================

/// GET /api/reports
///
/// Full report (summary, breakdowns, monthly series, rig table) for the
/// filter query. Accepts `monthOrder` in addition to the filter parameters.
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<ReportData> {
    let order = query.month_order()?;
    let criteria = FilterCriteria::try_from(query)?;
    Ok(Json(
        reports::get_report(state.repository.as_ref(), &criteria, order).await?,
    ))
}

/// GET /api/reports/monthly
pub async fn get_monthly_stats(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<MonthlyStat>> {
    let order = query.month_order()?;
    let criteria = FilterCriteria::try_from(query)?;
    let inspections =
        db_services::list_filtered_inspections(state.repository.as_ref(), &criteria).await?;
    Ok(Json(monthly::monthly_stats(&inspections, order)))
}

/// GET /api/reports/rigs
///
/// Every registered rig appears even with no matching inspections.
pub async fn get_rig_performance(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<Vec<RigPerformance>> {
    let criteria = FilterCriteria::try_from(query)?;
    let repo = state.repository.as_ref();
    let inspections = db_services::list_inspections(repo).await?;
    let rigs = db_services::list_rigs(repo).await?;

    let filtered = services::filter_inspections(&inspections, &criteria, Utc::now());
    Ok(Json(services::rig_performance(&rigs, &filtered)))
}

/// GET /api/reports/severity
pub async fn get_breakdown(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<BreakdownResponse> {
    let criteria = FilterCriteria::try_from(query)?;
    let inspections =
        db_services::list_filtered_inspections(state.repository.as_ref(), &criteria).await?;

    Ok(Json(BreakdownResponse {
        severity: breakdown::severity_breakdown(&inspections),
        statuses: breakdown::status_breakdown(&inspections),
    }))
}
