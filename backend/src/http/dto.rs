//! Data Transfer Objects for the HTTP API.
//!
//! Entity and report types are serialized as-is from [`crate::api`]; this
//! module only adds the query-string and envelope types specific to HTTP.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::models::parse_date;
use crate::services::filtering::{FilterCriteria, Period};
use crate::services::monthly::MonthOrder;

pub use crate::api::{
    Inspection, InspectionDraft, Inspector, InspectorDraft, MonthlyStat, ReportData,
    ReportSummary, Rig, RigDraft, RigPerformance, SeverityCount, StatusBreakdown,
};

/// Filter query string accepted by `/api/inspections` and `/api/reports*`.
///
/// Every field is a raw string so an empty value (`?rig=`) means "unset"
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterQuery {
    pub rig: Option<String>,
    pub inspector: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Keyword search over title, rig and description.
    pub q: Option<String>,
    /// `first-seen` (default) or `calendar`.
    pub month_order: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn query_date(name: &str, value: Option<String>) -> Result<Option<chrono::NaiveDate>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).ok_or_else(|| {
            AppError::BadRequest(format!("{} '{}' is not a YYYY-MM-DD date", name, raw))
        }),
    }
}

impl FilterQuery {
    /// Requested month bucket order.
    pub fn month_order(&self) -> Result<MonthOrder, AppError> {
        match self.month_order.as_deref().map(str::trim) {
            None | Some("") => Ok(MonthOrder::default()),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "first-seen" => Ok(MonthOrder::FirstSeen),
                "calendar" => Ok(MonthOrder::Calendar),
                _ => Err(AppError::BadRequest(format!(
                    "monthOrder '{}' must be 'first-seen' or 'calendar'",
                    raw
                ))),
            },
        }
    }
}

impl TryFrom<FilterQuery> for FilterCriteria {
    type Error = AppError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        Ok(FilterCriteria {
            start_date: query_date("startDate", query.start_date)?,
            end_date: query_date("endDate", query.end_date)?,
            rig: non_empty(query.rig),
            inspector: non_empty(query.inspector),
            status: non_empty(query.status),
            severity: non_empty(query.severity),
            period: non_empty(query.period)
                .map(Period::from)
                .unwrap_or_default(),
            query: non_empty(query.q),
        })
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Repository status
    pub repository: String,
}

/// Response for `/api/reports/severity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub severity: Vec<SeverityCount>,
    pub statuses: StatusBreakdown,
}
