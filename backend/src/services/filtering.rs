//! Inspection filter pipeline.
//!
//! Given the full inspection list and a [`FilterCriteria`], produce the
//! matching subset. Stages run in a fixed order (inspector, rig, status,
//! severity, temporal window, keyword search); a stage whose criterion is the
//! `"all"`/empty sentinel is not added to the pipeline at all. The input is
//! never mutated and the output preserves input order.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{end_of_day, start_of_day, Inspection, InspectionStatus, Priority};

/// Sentinel accepted by every string selector to mean "no constraint".
pub const ALL: &str = "all";

// =========================================================
// Period
// =========================================================

/// Relative time period selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    #[default]
    All,
    Last7Days,
    Last30Days,
    Last90Days,
    LastYear,
    /// Any other value, including `custom` without dates. Bounded by the
    /// epoch below and `now` above.
    Unrecognized(String),
}

impl Period {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | ALL => Self::All,
            "last-7-days" => Self::Last7Days,
            "last-30-days" => Self::Last30Days,
            "last-90-days" => Self::Last90Days,
            "last-year" => Self::LastYear,
            _ => Self::Unrecognized(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
            Self::Last90Days => "last-90-days",
            Self::LastYear => "last-year",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Inclusive `(from, to)` window for this period, or `None` for `All`.
    pub fn window(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let from = match self {
            Self::All => return None,
            Self::Last7Days => now - Duration::days(7),
            Self::Last30Days => now - Duration::days(30),
            Self::Last90Days => now - Duration::days(90),
            Self::LastYear => now
                .checked_sub_months(Months::new(12))
                .unwrap_or(DateTime::UNIX_EPOCH),
            Self::Unrecognized(_) => DateTime::UNIX_EPOCH,
        };
        Some((from, now))
    }
}

impl From<String> for Period {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Period {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.as_str().to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// Criteria
// =========================================================

/// Filter criteria built per request / per render.
///
/// String selectors use `None`, `""` or `"all"` (any case) to mean no
/// constraint. When both `start_date` and `end_date` are set the custom range
/// wins and `period` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub rig: Option<String>,
    pub inspector: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub period: Period,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Keyword matched against title, rig and description.
    pub query: Option<String>,
}

fn selection(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL))
}

impl FilterCriteria {
    /// Criteria with every selector at its sentinel.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_rig(mut self, rig: impl Into<String>) -> Self {
        self.rig = Some(rig.into());
        self
    }

    pub fn with_inspector(mut self, inspector: impl Into<String>) -> Self {
        self.inspector = Some(inspector.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_period(mut self, period: impl Into<Period>) -> Self {
        self.period = period.into();
        self
    }

    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Custom range bounds, only when both ends are set.
    pub fn custom_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start_of_day(start), end_of_day(end))),
            _ => None,
        }
    }

    /// Effective temporal window: the custom range if present, otherwise the
    /// relative period.
    pub fn temporal_window(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.custom_range().or_else(|| self.period.window(now))
    }

    /// True when no stage would be added to the pipeline.
    pub fn is_pass_through(&self, now: DateTime<Utc>) -> bool {
        self.stages(now).is_empty()
    }

    /// Active pipeline stages in evaluation order.
    pub(crate) fn stages(&self, now: DateTime<Utc>) -> Vec<Stage<'_>> {
        let mut stages = Vec::new();

        if let Some(name) = selection(&self.inspector) {
            stages.push(Stage::Inspector(name));
        }
        if let Some(name) = selection(&self.rig) {
            stages.push(Stage::Rig(name));
        }
        if let Some(raw) = selection(&self.status) {
            stages.push(Stage::Status(InspectionStatus::parse(raw)));
        }
        if let Some(raw) = selection(&self.severity) {
            stages.push(Stage::Severity(Priority::parse(raw)));
        }
        if let Some((from, to)) = self.temporal_window(now) {
            stages.push(Stage::Window { from, to });
        }
        if let Some(needle) = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        {
            stages.push(Stage::Search(needle.to_lowercase()));
        }

        stages
    }
}

// =========================================================
// Pipeline
// =========================================================

/// One narrowing predicate of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Stage<'a> {
    Inspector(&'a str),
    Rig(&'a str),
    Status(InspectionStatus),
    Severity(Priority),
    Window {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    Search(String),
}

impl Stage<'_> {
    fn keep(&self, inspection: &Inspection) -> bool {
        match self {
            Stage::Inspector(name) => inspection.has_inspector(name),
            Stage::Rig(name) => inspection.rig == *name,
            Stage::Status(status) => inspection.status == *status,
            Stage::Severity(priority) => inspection.priority == *priority,
            // Malformed or missing createdAt never satisfies a date bound.
            Stage::Window { from, to } => inspection
                .created_at_utc()
                .map(|created| *from <= created && created <= *to)
                .unwrap_or(false),
            Stage::Search(needle) => matches_query(inspection, needle),
        }
    }
}

/// Case-insensitive substring match of an already-lowercased needle.
pub fn matches_query(inspection: &Inspection, needle: &str) -> bool {
    [
        inspection.title.as_str(),
        inspection.rig.as_str(),
        inspection.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filter `inspections` by `criteria`, evaluating relative periods against `now`.
pub fn filter_inspections(
    inspections: &[Inspection],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<Inspection> {
    let stages = criteria.stages(now);

    let filtered: Vec<Inspection> = inspections
        .iter()
        .filter(|inspection| stages.iter().all(|stage| stage.keep(inspection)))
        .cloned()
        .collect();

    log::debug!(
        "filter_inspections: {} stage(s), {} of {} inspection(s) kept",
        stages.len(),
        filtered.len(),
        inspections.len()
    );

    filtered
}

/// [`filter_inspections`] evaluated at the current time.
pub fn filter_inspections_now(
    inspections: &[Inspection],
    criteria: &FilterCriteria,
) -> Vec<Inspection> {
    filter_inspections(inspections, criteria, Utc::now())
}

#[cfg(test)]
#[path = "filtering_tests.rs"]
mod filtering_tests;
