//! Monthly inspection counts for the time-series chart.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{month_abbreviation, Inspection, InspectionStatus, MONTH_ABBREVIATIONS};

/// Counts for one month bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStat {
    /// Abbreviated month name ("Jan".."Dec").
    pub month: String,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub fail: usize,
}

impl MonthlyStat {
    fn empty(month: &str) -> Self {
        Self {
            month: month.to_string(),
            total: 0,
            completed: 0,
            pending: 0,
            fail: 0,
        }
    }

    fn record(&mut self, status: &InspectionStatus) {
        self.total += 1;
        match status {
            InspectionStatus::Completed => self.completed += 1,
            InspectionStatus::Pending => self.pending += 1,
            InspectionStatus::Fail => self.fail += 1,
            InspectionStatus::InProgress | InspectionStatus::Other(_) => {}
        }
    }
}

/// Bucket ordering for [`monthly_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthOrder {
    /// Order in which each month first appears in the input.
    #[default]
    FirstSeen,
    /// January through December.
    Calendar,
}

/// Bucket inspections by the month of `createdAt`.
///
/// Months of different years share a bucket. Inspections whose `createdAt`
/// is missing or unparseable are skipped.
pub fn monthly_stats(inspections: &[Inspection], order: MonthOrder) -> Vec<MonthlyStat> {
    let mut buckets: Vec<MonthlyStat> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    let mut skipped = 0usize;

    for inspection in inspections {
        let Some(created) = inspection.created_at_utc() else {
            skipped += 1;
            continue;
        };
        let month = month_abbreviation(&created);
        let slot = *index.entry(month).or_insert_with(|| {
            buckets.push(MonthlyStat::empty(month));
            buckets.len() - 1
        });
        buckets[slot].record(&inspection.status);
    }

    if skipped > 0 {
        log::debug!(
            "monthly_stats: skipped {} inspection(s) without a valid createdAt",
            skipped
        );
    }

    if order == MonthOrder::Calendar {
        buckets.sort_by_key(|b| {
            MONTH_ABBREVIATIONS
                .iter()
                .position(|m| *m == b.month)
                .unwrap_or(MONTH_ABBREVIATIONS.len())
        });
    }

    buckets
}
