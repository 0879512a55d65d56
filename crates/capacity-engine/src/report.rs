//! Serializable report shapes for the two main queries.
//!
//! These are the JSON payloads consumers see; field names here are the wire
//! contract. Reports are assembled from already-resolved entities, so
//! building one cannot fail.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::TimeWindow;
use crate::conflict::{check_conflicts, ConflictFinding};
use crate::model::{Assignment, Resource, Task};
use crate::utilization::utilization_percentage;

/// Utilization of one resource over one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationReport {
    pub resource_id: String,
    pub resource_name: String,
    pub utilization_percentage: f64,
    /// Weekly capacity in hours, echoed for display.
    pub capacity: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Builds the utilization report for `resource` over `window`.
pub fn utilization_report(
    resource: &Resource,
    assignments: &[Assignment],
    tasks: &[Task],
    window: TimeWindow,
) -> UtilizationReport {
    UtilizationReport {
        resource_id: resource.id.clone(),
        resource_name: resource.name.clone(),
        utilization_percentage: utilization_percentage(resource, assignments, tasks, window),
        capacity: resource.capacity,
        period_start: window.start,
        period_end: window.end,
    }
}

/// Outcome of a conflict check for one proposed pairing. `success` reports
/// that the check ran, not that it was clean; look at `conflicts` for that.
/// Entity resolution happens before a report is built, so it is always true
/// here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictReport {
    pub success: bool,
    pub conflicts: Vec<ConflictFinding>,
    pub task_name: String,
    pub resource_name: String,
}

/// Runs the conflict checks for assigning `resource` to `task` and wraps the
/// findings for serialization.
pub fn conflict_report(
    task: &Task,
    resource: &Resource,
    assignments: &[Assignment],
    tasks: &[Task],
) -> ConflictReport {
    ConflictReport {
        success: true,
        conflicts: check_conflicts(task, resource, assignments, tasks),
        task_name: task.name.clone(),
        resource_name: resource.name.clone(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
