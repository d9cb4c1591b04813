#![allow(dead_code)]

use chrono::{Duration, SecondsFormat, Utc};
use std::collections::HashSet;
use std::sync::Mutex;

use rig_inspect::api::{InspectionId, InspectorId, RigId, SeedData};
use rig_inspect::models::{Inspection, InspectionStatus, Inspector, Priority, Rig};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =========================================================
// Fixtures
// =========================================================

/// RFC 3339 timestamp `days` before the current time.
pub fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn inspection(
    id: &str,
    rig: &str,
    status: &str,
    priority: &str,
    inspectors: &[&str],
    created_at: &str,
) -> Inspection {
    Inspection {
        id: InspectionId::new(id),
        title: format!("{} inspection on {}", priority, rig),
        description: "Routine safety inspection".to_string(),
        priority: Priority::parse(priority),
        status: InspectionStatus::parse(status),
        rig: rig.to_string(),
        inspectors: inspectors.iter().map(|s| s.to_string()).collect(),
        schedule_date: None,
        created_at: Some(created_at.to_string()),
        estimated_duration: Some(2.0),
    }
}

/// Two rigs, two inspectors and four inspections created relative to now:
///
/// | id | rig | status    | priority | inspectors | created      |
/// |----|-----|-----------|----------|------------|--------------|
/// | i1 | A   | completed | Urgent   | Jane       | 1 day ago    |
/// | i2 | A   | fail      | High     | Ali, Jane  | 10 days ago  |
/// | i3 | B   | pending   | Low      | Ali        | 40 days ago  |
/// | i4 | C   | completed | Medium   | Jane       | 2 days ago   |
///
/// Rig "C" is not registered.
pub fn sample_seed() -> SeedData {
    SeedData {
        rigs: vec![
            Rig {
                id: RigId::new("rig-a"),
                name: "A".to_string(),
                location: "North Sea".to_string(),
            },
            Rig {
                id: RigId::new("rig-b"),
                name: "B".to_string(),
                location: "Gulf of Mexico".to_string(),
            },
        ],
        inspectors: vec![
            Inspector {
                id: InspectorId::new("jane"),
                name: "Jane".to_string(),
                specialties: vec!["Electrical".to_string()],
            },
            Inspector {
                id: InspectorId::new("ali"),
                name: "Ali".to_string(),
                specialties: vec!["Structural".to_string()],
            },
        ],
        inspections: vec![
            inspection("i1", "A", "completed", "Urgent", &["Jane"], &days_ago(1)),
            inspection("i2", "A", "fail", "High", &["Ali", "Jane"], &days_ago(10)),
            inspection("i3", "B", "pending", "Low", &["Ali"], &days_ago(40)),
            inspection("i4", "C", "completed", "Medium", &["Jane"], &days_ago(2)),
        ],
    }
}
