//! Severity and status breakdowns feeding the dashboard charts and KPI cards.
//!
//! Every reducer here goes through the canonical [`Priority`] /
//! [`InspectionStatus`] comparison, so "High", "high" and "HIGH" count the
//! same everywhere.

use serde::{Deserialize, Serialize};

use crate::models::{Inspection, InspectionStatus, Priority};

/// Count of inspections at one priority level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub severity: Priority,
    pub count: usize,
}

/// Count of inspections per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub fail: usize,
    /// Statuses outside the known set.
    pub other: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.pending + self.fail + self.other
    }
}

/// Headline KPIs for the reports page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    pub completed: usize,
    pub fail: usize,
    /// Inspections at `Urgent` priority.
    pub critical: usize,
    /// Completed as a percentage of total (0.0 for an empty list).
    pub compliance_rate: f64,
    /// Failed as a percentage of total (0.0 for an empty list).
    pub fail_rate: f64,
}

/// Count inspections per priority over the fixed [`Priority::LEVELS`] set.
///
/// All four levels are always present, most severe first. Unknown priorities
/// are not counted.
pub fn severity_breakdown(inspections: &[Inspection]) -> Vec<SeverityCount> {
    Priority::LEVELS
        .iter()
        .map(|level| SeverityCount {
            severity: level.clone(),
            count: inspections.iter().filter(|i| i.priority == *level).count(),
        })
        .collect()
}

/// Count inspections per status.
pub fn status_breakdown(inspections: &[Inspection]) -> StatusBreakdown {
    inspections
        .iter()
        .fold(StatusBreakdown::default(), |mut acc, inspection| {
            match inspection.status {
                InspectionStatus::Completed => acc.completed += 1,
                InspectionStatus::InProgress => acc.in_progress += 1,
                InspectionStatus::Pending => acc.pending += 1,
                InspectionStatus::Fail => acc.fail += 1,
                InspectionStatus::Other(_) => acc.other += 1,
            }
            acc
        })
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Headline KPIs over an (already filtered) inspection list.
pub fn report_summary(inspections: &[Inspection]) -> ReportSummary {
    let statuses = status_breakdown(inspections);
    let total = inspections.len();
    let critical = inspections
        .iter()
        .filter(|i| i.priority == Priority::Urgent)
        .count();

    ReportSummary {
        total,
        completed: statuses.completed,
        fail: statuses.fail,
        critical,
        compliance_rate: percentage(statuses.completed, total),
        fail_rate: percentage(statuses.fail, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InspectionId;

    fn inspection(status: &str, priority: &str) -> Inspection {
        Inspection {
            id: InspectionId::generate(),
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::parse(priority),
            status: InspectionStatus::parse(status),
            rig: "A".to_string(),
            inspectors: vec![],
            schedule_date: None,
            created_at: None,
            estimated_duration: None,
        }
    }

    #[test]
    fn test_severity_breakdown_has_fixed_labels() {
        let counts = severity_breakdown(&[]);
        let labels: Vec<&str> = counts.iter().map(|c| c.severity.as_str()).collect();
        assert_eq!(labels, vec!["Urgent", "High", "Medium", "Low"]);
        assert!(counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_severity_breakdown_ignores_case_and_unknowns() {
        let inspections = vec![
            inspection("pending", "high"),
            inspection("pending", "High"),
            inspection("pending", "LOW"),
            inspection("pending", "critical"),
        ];
        let counts = severity_breakdown(&inspections);
        assert_eq!(counts[1].count, 2);
        assert_eq!(counts[3].count, 1);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_status_breakdown() {
        let inspections = vec![
            inspection("completed", "Low"),
            inspection("pass", "Low"),
            inspection("fail", "Low"),
            inspection("in-progress", "Low"),
            inspection("pending", "Low"),
            inspection("on-hold", "Low"),
        ];
        let breakdown = status_breakdown(&inspections);
        assert_eq!(
            breakdown,
            StatusBreakdown {
                completed: 2,
                in_progress: 1,
                pending: 1,
                fail: 1,
                other: 1,
            }
        );
        assert_eq!(breakdown.total(), inspections.len());
    }

    #[test]
    fn test_unset_fields_land_in_no_fixed_bucket() {
        let mut unset = inspection("pending", "Low");
        unset.status = InspectionStatus::default();
        unset.priority = Priority::default();

        let counts = severity_breakdown(std::slice::from_ref(&unset));
        assert!(counts.iter().all(|c| c.count == 0));

        let breakdown = status_breakdown(&[unset]);
        assert_eq!(breakdown.pending, 0);
        assert_eq!(breakdown.other, 1);
    }

    #[test]
    fn test_report_summary_rates() {
        let inspections = vec![
            inspection("completed", "Urgent"),
            inspection("completed", "Low"),
            inspection("fail", "urgent"),
            inspection("pending", "Medium"),
        ];
        let summary = report_summary(&inspections);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.fail, 1);
        assert_eq!(summary.critical, 2);
        assert!((summary.compliance_rate - 50.0).abs() < 1e-9);
        assert!((summary.fail_rate - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_summary_empty_has_zero_rates() {
        let summary = report_summary(&[]);
        assert_eq!(summary, ReportSummary::default());
        assert!(summary.compliance_rate.is_finite());
    }
}
