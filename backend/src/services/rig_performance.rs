//! Per-rig compliance aggregation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Inspection, InspectionStatus, Rig};

/// Inspection volume and compliance for one rig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigPerformance {
    /// Rig name.
    pub rig: String,
    pub inspections: usize,
    /// Number of failed inspections.
    pub issues: usize,
    /// Completed inspections as a rounded percentage of all inspections.
    pub compliance: u32,
}

#[derive(Default)]
struct RigTally {
    inspections: usize,
    issues: usize,
    completed: usize,
}

impl RigTally {
    fn compliance(&self) -> u32 {
        if self.inspections == 0 {
            return 0;
        }
        (self.completed as f64 / self.inspections as f64 * 100.0).round() as u32
    }
}

/// Aggregate inspections per rig.
///
/// Every known rig gets a row (in `rigs` order) even with zero inspections.
/// Inspections naming a rig that is not in `rigs` get a synthetic row,
/// appended in first-seen order.
pub fn rig_performance(rigs: &[Rig], inspections: &[Inspection]) -> Vec<RigPerformance> {
    let mut order: Vec<String> = Vec::with_capacity(rigs.len());
    let mut tallies: HashMap<String, RigTally> = HashMap::with_capacity(rigs.len());

    for rig in rigs {
        if !tallies.contains_key(&rig.name) {
            order.push(rig.name.clone());
            tallies.insert(rig.name.clone(), RigTally::default());
        }
    }

    for inspection in inspections {
        if !tallies.contains_key(&inspection.rig) {
            log::debug!(
                "rig_performance: inspection {} references unknown rig '{}'",
                inspection.id,
                inspection.rig
            );
            order.push(inspection.rig.clone());
        }

        let tally = tallies.entry(inspection.rig.clone()).or_default();
        tally.inspections += 1;
        match inspection.status {
            InspectionStatus::Fail => tally.issues += 1,
            InspectionStatus::Completed => tally.completed += 1,
            _ => {}
        }
    }

    order
        .into_iter()
        .map(|rig| {
            let tally = tallies.remove(&rig).unwrap_or_default();
            RigPerformance {
                compliance: tally.compliance(),
                inspections: tally.inspections,
                issues: tally.issues,
                rig,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InspectionId;
    use crate::models::Priority;

    fn inspection(rig: &str, status: &str) -> Inspection {
        Inspection {
            id: InspectionId::generate(),
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::Low,
            status: InspectionStatus::parse(status),
            rig: rig.to_string(),
            inspectors: vec![],
            schedule_date: None,
            created_at: None,
            estimated_duration: None,
        }
    }

    #[test]
    fn test_zero_inspections_has_zero_compliance() {
        let result = rig_performance(&[Rig::named("R1")], &[]);
        assert_eq!(
            result,
            vec![RigPerformance {
                rig: "R1".to_string(),
                inspections: 0,
                issues: 0,
                compliance: 0,
            }]
        );
    }

    #[test]
    fn test_two_rig_scenario() {
        let inspections = vec![
            inspection("A", "completed"),
            inspection("A", "fail"),
            inspection("B", "pending"),
        ];
        let result = rig_performance(&[Rig::named("A"), Rig::named("B")], &inspections);

        assert_eq!(result.len(), 2);
        let rows: Vec<(&str, usize, usize, u32)> = result
            .iter()
            .map(|r| (r.rig.as_str(), r.inspections, r.issues, r.compliance))
            .collect();
        assert_eq!(rows, vec![("A", 2, 1, 50), ("B", 1, 0, 0)]);
    }

    #[test]
    fn test_unknown_rig_gets_synthetic_bucket_after_known_rigs() {
        let inspections = vec![
            inspection("Ghost", "completed"),
            inspection("A", "completed"),
            inspection("Ghost", "fail"),
        ];
        let result = rig_performance(&[Rig::named("A"), Rig::named("B")], &inspections);

        let names: Vec<&str> = result.iter().map(|r| r.rig.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "Ghost"]);
        assert_eq!(result[2].inspections, 2);
        assert_eq!(result[2].issues, 1);
        assert_eq!(result[2].compliance, 50);
    }

    #[test]
    fn test_compliance_rounds_to_nearest_percent() {
        let inspections = vec![
            inspection("A", "completed"),
            inspection("A", "completed"),
            inspection("A", "pending"),
        ];
        let result = rig_performance(&[], &inspections);
        assert_eq!(result[0].compliance, 67);
    }

    #[test]
    fn test_duplicate_rig_names_collapse() {
        let rigs = [Rig::named("A"), Rig::named("A")];
        let result = rig_performance(&rigs, &[inspection("A", "pass")]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].compliance, 100);
    }
}
