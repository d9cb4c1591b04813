//! Analytics services over inspection data.
//!
//! Everything here except [`reports::get_report`] is synchronous and pure:
//! the caller fetches a snapshot from the repository and passes slices in.

pub mod breakdown;
pub mod filtering;
pub mod monthly;
pub mod reports;
pub mod rig_performance;

pub use breakdown::{report_summary, severity_breakdown, status_breakdown};
pub use filtering::{filter_inspections, filter_inspections_now};
pub use monthly::monthly_stats;
pub use reports::{compute_report, get_report};
pub use rig_performance::rig_performance;
