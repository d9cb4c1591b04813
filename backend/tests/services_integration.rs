//! Service-layer tests over a seeded LocalRepository.

mod support;

use rig_inspect::api::{FilterCriteria, InspectionDraft, MonthOrder, RigDraft, RigId};
use rig_inspect::db::repositories::LocalRepository;
use rig_inspect::db::services;
use rig_inspect::models::{InspectionStatus, Priority};
use rig_inspect::services::reports;

fn seeded() -> LocalRepository {
    LocalRepository::with_seed(support::sample_seed())
}

#[tokio::test]
async fn test_filtered_listing_by_rig_and_period() {
    let repo = seeded();
    let criteria = FilterCriteria::all()
        .with_rig("A")
        .with_period("last-7-days");

    let result = services::list_filtered_inspections(&repo, &criteria)
        .await
        .unwrap();
    let ids: Vec<&str> = result.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["i1"]);
}

#[tokio::test]
async fn test_filtered_listing_by_inspector_keeps_order() {
    let repo = seeded();
    let criteria = FilterCriteria::all().with_inspector("Jane");

    let result = services::list_filtered_inspections(&repo, &criteria)
        .await
        .unwrap();
    let ids: Vec<&str> = result.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["i1", "i2", "i4"]);
}

#[tokio::test]
async fn test_all_sentinels_return_everything() {
    let repo = seeded();
    let criteria = FilterCriteria::all()
        .with_rig("all")
        .with_inspector("ALL")
        .with_status("All")
        .with_severity("")
        .with_period("all");

    let result = services::list_filtered_inspections(&repo, &criteria)
        .await
        .unwrap();
    assert_eq!(result, services::list_inspections(&repo).await.unwrap());
}

#[tokio::test]
async fn test_report_includes_unregistered_rig_bucket() {
    let repo = seeded();
    let report = reports::get_report(&repo, &FilterCriteria::all(), MonthOrder::FirstSeen)
        .await
        .unwrap();

    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.completed, 2);
    assert_eq!(report.summary.fail, 1);
    assert_eq!(report.summary.critical, 1);
    assert!((report.summary.compliance_rate - 50.0).abs() < 1e-9);

    let rigs: Vec<(&str, usize, usize, u32)> = report
        .rig_performance
        .iter()
        .map(|r| (r.rig.as_str(), r.inspections, r.issues, r.compliance))
        .collect();
    assert_eq!(rigs, vec![("A", 2, 1, 50), ("B", 1, 0, 0), ("C", 1, 0, 100)]);

    assert_eq!(
        report.monthly.iter().map(|m| m.total).sum::<usize>(),
        report.summary.total
    );
}

#[tokio::test]
async fn test_rig_rename_keeps_report_history() {
    let repo = seeded();
    services::update_rig(
        &repo,
        &RigId::new("rig-a"),
        RigDraft {
            name: "Alpha".to_string(),
            location: "North Sea".to_string(),
        },
    )
    .await
    .unwrap();

    let criteria = FilterCriteria::all().with_rig("Alpha");
    let result = services::list_filtered_inspections(&repo, &criteria)
        .await
        .unwrap();
    assert_eq!(result.len(), 2);

    let report = reports::get_report(&repo, &FilterCriteria::all(), MonthOrder::Calendar)
        .await
        .unwrap();
    assert_eq!(report.rig_performance[0].rig, "Alpha");
    assert_eq!(report.rig_performance[0].inspections, 2);
}

#[tokio::test]
async fn test_created_inspection_is_visible_to_recent_period() {
    let repo = seeded();
    let created = services::create_inspection(
        &repo,
        InspectionDraft {
            title: "Crane load test".to_string(),
            priority: Priority::Urgent,
            status: InspectionStatus::InProgress,
            rig: "B".to_string(),
            inspectors: vec!["Ali".to_string()],
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let criteria = FilterCriteria::all()
        .with_rig("B")
        .with_period("last-7-days");
    let result = services::list_filtered_inspections(&repo, &criteria)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, created.id);
}

#[tokio::test]
async fn test_health_check_reflects_repository_state() {
    let repo = seeded();
    assert!(services::health_check(&repo).await.unwrap());
    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
    assert!(services::list_rigs(&repo).await.is_err());
}
