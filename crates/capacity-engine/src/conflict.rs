//! Assignment conflict detection.
//!
//! Evaluates a proposed (task, resource) pairing against the current schedule
//! and reports every problem found, in a fixed order: skill gaps first, then
//! utilization pressure, then incomplete dependencies that overlap the task's
//! schedule. An empty result means the pairing is clean.
//!
//! Checks never fail and never mutate: bad references (a dependency id that
//! matches no task) are skipped, not reported, so a half-entered schedule
//! still produces useful findings.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::model::{Assignment, Resource, Task, TaskStatus};
use crate::utilization::utilization_percentage;

/// Utilization above this percentage (strictly) raises
/// [`ConflictKind::HighUtilization`].
pub const HIGH_UTILIZATION_THRESHOLD: f64 = 80.0;

/// Category of a detected conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    SkillMismatch,
    HighUtilization,
    DependencyConflict,
}

/// One detected problem with a proposed pairing, with a human-readable
/// message ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictFinding {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub message: String,
}

/// Checks assigning `resource` to `task` against the full schedule.
///
/// Three independent checks run in order:
///
/// 1. **Skills**: every skill the task requires must appear among the
///    resource's skills, matched by exact name. Missing names are listed in
///    the task's declared order, deduplicated.
/// 2. **Utilization**: the resource's prorated utilization over the task's
///    own schedule window must not exceed [`HIGH_UTILIZATION_THRESHOLD`].
///    Exactly at the threshold is fine.
/// 3. **Dependencies**: each task `task` directly depends on must either be
///    completed or not overlap the task's window. Only direct dependencies
///    are examined; transitive chains are their own tasks' problem.
///
/// `assignments` and `tasks` are the whole schedule, not pre-filtered; the
/// utilization check narrows to this resource internally.
pub fn check_conflicts(
    task: &Task,
    resource: &Resource,
    assignments: &[Assignment],
    tasks: &[Task],
) -> Vec<ConflictFinding> {
    let mut findings = Vec::new();

    if !task.required_skills.is_empty() {
        let have: HashSet<&str> = resource.skills.iter().map(|s| s.name.as_str()).collect();
        let mut seen = HashSet::new();
        let missing: Vec<&str> = task
            .required_skills
            .iter()
            .map(|s| s.name.as_str())
            .filter(|name| !have.contains(name) && seen.insert(*name))
            .collect();
        if !missing.is_empty() {
            findings.push(ConflictFinding {
                kind: ConflictKind::SkillMismatch,
                message: format!("Resource lacks required skills: {}", missing.join(", ")),
            });
        }
    }

    let utilization = utilization_percentage(resource, assignments, tasks, task.window());
    if utilization > HIGH_UTILIZATION_THRESHOLD {
        findings.push(ConflictFinding {
            kind: ConflictKind::HighUtilization,
            message: format!("Resource has high utilization ({utilization:.1}%)"),
        });
    }

    let tasks_by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
    // Seeding with the task's own id makes self-dependencies inert.
    let mut visited: HashSet<&str> = HashSet::from([task.id.as_str()]);
    for dep_id in &task.depends_on {
        if !visited.insert(dep_id.as_str()) {
            continue;
        }
        let Some(dep) = tasks_by_id.get(dep_id.as_str()) else {
            continue;
        };
        if dep.status != TaskStatus::Completed && dep.window().overlaps(task.window()) {
            findings.push(ConflictFinding {
                kind: ConflictKind::DependencyConflict,
                message: format!(
                    "{} is not yet complete and overlaps this task's schedule",
                    dep.name
                ),
            });
        }
    }

    findings
}

// ── Tests ───────────────────────────────────────────────────────────────────
