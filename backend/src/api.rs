//! Public API surface for the backend.
//!
//! This file consolidates identifier types and the DTOs shared by the HTTP
//! server, the client and the analytics services. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    Inspection, InspectionDraft, InspectionStatus, Inspector, InspectorDraft, Priority, Rig,
    RigDraft,
};
pub use crate::services::breakdown::{ReportSummary, SeverityCount, StatusBreakdown};
pub use crate::services::filtering::{FilterCriteria, Period};
pub use crate::services::monthly::{MonthOrder, MonthlyStat};
pub use crate::services::reports::ReportData;
pub use crate::services::rig_performance::RigPerformance;
pub use crate::db::seed::SeedData;

use serde::{Deserialize, Serialize};

/// Error body returned by the HTTP API for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

crate::define_id_type!(InspectionId);
crate::define_id_type!(RigId);
crate::define_id_type!(InspectorId);
