//! Full report composition for the reports page.
//!
//! A report runs the filter pipeline once and feeds the same filtered slice to
//! every reducer, so the KPI cards, charts and rig table always agree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::{Inspection, Rig};
use crate::services::breakdown::{
    report_summary, severity_breakdown, status_breakdown, ReportSummary, SeverityCount,
    StatusBreakdown,
};
use crate::services::filtering::{filter_inspections, FilterCriteria};
use crate::services::monthly::{monthly_stats, MonthOrder, MonthlyStat};
use crate::services::rig_performance::{rig_performance, RigPerformance};

/// Everything the reports page renders for one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub criteria: FilterCriteria,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub severity: Vec<SeverityCount>,
    pub statuses: StatusBreakdown,
    pub monthly: Vec<MonthlyStat>,
    pub rig_performance: Vec<RigPerformance>,
}

/// Compute a report from already-loaded data.
pub fn compute_report(
    inspections: &[Inspection],
    rigs: &[Rig],
    criteria: &FilterCriteria,
    order: MonthOrder,
    now: DateTime<Utc>,
) -> ReportData {
    let filtered = filter_inspections(inspections, criteria, now);

    ReportData {
        criteria: criteria.clone(),
        generated_at: now,
        summary: report_summary(&filtered),
        severity: severity_breakdown(&filtered),
        statuses: status_breakdown(&filtered),
        monthly: monthly_stats(&filtered, order),
        rig_performance: rig_performance(rigs, &filtered),
    }
}

/// Load inspections and rigs from `repo` and compute a report at the current time.
pub async fn get_report(
    repo: &dyn FullRepository,
    criteria: &FilterCriteria,
    order: MonthOrder,
) -> RepositoryResult<ReportData> {
    let inspections = repo.list_inspections().await?;
    let rigs = repo.list_rigs().await?;

    log::debug!(
        "get_report: {} inspection(s), {} rig(s), order={:?}",
        inspections.len(),
        rigs.len(),
        order
    );

    Ok(compute_report(
        &inspections,
        &rigs,
        criteria,
        order,
        Utc::now(),
    ))
}
