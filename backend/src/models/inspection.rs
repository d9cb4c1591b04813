//! Inspection, rig and inspector entities.
//!
//! The wire shape matches what the dashboard sends and expects: camelCase
//! JSON with a Mongo-style `_id`. Rigs and inspectors are referenced from an
//! inspection by *name*, not by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::{InspectionId, InspectorId, RigId};

// =========================================================
// Status / priority enums
// =========================================================

/// Lifecycle status of an inspection.
///
/// Parsing is case-insensitive and accepts the aliases used across the
/// dashboard (`pass`/`passed` for completed, `failed` for fail). Unknown values
/// are kept, lowercased, in [`InspectionStatus::Other`] so they compare
/// unequal to every known status instead of failing deserialization.
///
/// A record without a status holds `Other("")`: it matches no status filter
/// and lands in no per-status bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InspectionStatus {
    Pending,
    InProgress,
    Completed,
    Fail,
    Other(String),
}

impl InspectionStatus {
    pub const KNOWN: [InspectionStatus; 4] = [
        InspectionStatus::Pending,
        InspectionStatus::InProgress,
        InspectionStatus::Completed,
        InspectionStatus::Fail,
    ];

    /// Parse a raw status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Self::Pending,
            "in-progress" | "in progress" | "in_progress" | "inprogress" => Self::InProgress,
            "completed" | "complete" | "pass" | "passed" => Self::Completed,
            "fail" | "failed" => Self::Fail,
            _ => Self::Other(normalized),
        }
    }

    /// Canonical wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Fail => "fail",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Other(raw) if raw.is_empty())
    }
}

impl Default for InspectionStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl FromStr for InspectionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for InspectionStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<InspectionStatus> for String {
    fn from(status: InspectionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority (a.k.a. severity) of an inspection. Unset is `Other("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Other(String),
}

impl Priority {
    /// Fixed label set used by severity breakdowns, most severe first.
    pub const LEVELS: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Parse a raw priority string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Other(normalized),
        }
    }

    /// Canonical wire representation (capitalized, as stored by the dashboard).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Other(raw) if raw.is_empty())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =========================================================
// Entities
// =========================================================

/// A safety inspection of a rig.
///
/// Timestamps are kept as the raw strings received; use
/// [`Inspection::created_at_utc`] / [`Inspection::schedule_date_utc`] to get
/// parsed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    #[serde(rename = "_id", default)]
    pub id: InspectionId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: InspectionStatus,
    /// Rig name.
    #[serde(default)]
    pub rig: String,
    /// Inspector names, in assignment order.
    #[serde(default)]
    pub inspectors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Estimated duration in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<f64>,
}

impl Inspection {
    /// Parsed creation timestamp; `None` when missing or malformed.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(super::time::parse_timestamp)
    }

    /// Parsed due date; `None` when missing or malformed.
    pub fn schedule_date_utc(&self) -> Option<DateTime<Utc>> {
        self.schedule_date
            .as_deref()
            .and_then(super::time::parse_timestamp)
    }

    pub fn has_inspector(&self, name: &str) -> bool {
        self.inspectors.iter().any(|i| i == name)
    }

    /// Build a stored inspection from a draft.
    pub fn from_draft(id: InspectionId, created_at: String, draft: InspectionDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            rig: draft.rig,
            inspectors: draft.inspectors,
            schedule_date: draft.schedule_date,
            created_at: Some(created_at),
            estimated_duration: draft.estimated_duration,
        }
    }

    /// Replace every user-editable field with the draft's, keeping id and
    /// creation timestamp.
    pub fn apply_draft(&mut self, draft: InspectionDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority;
        self.status = draft.status;
        self.rig = draft.rig;
        self.inspectors = draft.inspectors;
        self.schedule_date = draft.schedule_date;
        self.estimated_duration = draft.estimated_duration;
    }
}

/// Create/update payload for an inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: InspectionStatus,
    #[serde(default)]
    pub rig: String,
    #[serde(default)]
    pub inspectors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<f64>,
}

impl InspectionDraft {
    /// Reject drafts the dashboard could never render.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Inspection title must not be empty".to_string());
        }
        if let Some(hours) = self.estimated_duration {
            if !hours.is_finite() || hours < 0.0 {
                return Err(format!(
                    "estimatedDuration must be a non-negative number of hours, got {}",
                    hours
                ));
            }
        }
        if let Some(ref raw) = self.schedule_date {
            if super::time::parse_timestamp(raw).is_none() {
                return Err(format!("scheduleDate '{}' is not a valid date", raw));
            }
        }
        Ok(())
    }
}

/// An offshore rig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rig {
    #[serde(rename = "_id", default)]
    pub id: RigId,
    pub name: String,
    #[serde(default)]
    pub location: String,
}

impl Rig {
    /// Rig known only by name (e.g. in tests or synthetic buckets).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: RigId::default(),
            name: name.into(),
            location: String::new(),
        }
    }
}

/// Create/update payload for a rig.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigDraft {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// An inspector who can be assigned to inspections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspector {
    #[serde(rename = "_id", default)]
    pub id: InspectorId,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Create/update payload for an inspector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorDraft {
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

fn require_name(kind: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err(format!("{} name must not be empty", kind))
    } else {
        Ok(())
    }
}

impl RigDraft {
    pub fn validate(&self) -> Result<(), String> {
        require_name("Rig", &self.name)
    }
}

impl InspectorDraft {
    pub fn validate(&self) -> Result<(), String> {
        require_name("Inspector", &self.name)
    }
}
