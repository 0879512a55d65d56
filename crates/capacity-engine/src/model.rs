//! Domain model: resources, skills, tasks, and assignments.
//!
//! These are plain serde-friendly data carriers. All scheduling math lives in
//! [`crate::utilization`], [`crate::overlap`], and [`crate::conflict`], which
//! take these types by reference and never mutate them. Identity is by string
//! id for resources and tasks and by case-sensitive name for skills.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::TimeWindow;

/// A named capability a resource can hold and a task can require.
/// Two skills are the same skill iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lifecycle state of a task. Only [`TaskStatus::Completed`] releases
/// dependency pressure on downstream tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// A person (or machine) that can be assigned work.
///
/// `capacity` is the hours the resource can work per week; daily availability
/// is derived as `capacity / 5` regardless of how many work days the resource
/// actually observes. `timezone` is an optional IANA name
/// ("America/New_York"); resources without one are treated as UTC by the
/// overlap engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    /// Weekly capacity in hours.
    pub capacity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            timezone: None,
            skills: Vec::new(),
            role: None,
            department: None,
        }
    }

    /// Sets the IANA timezone name, e.g. `"Europe/London"`.
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>) -> Self {
        self.skills.push(Skill::new(name));
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Whether the resource holds a skill with exactly this name.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name == name)
    }
}

/// A unit of schedulable work with an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    /// Ids of tasks that must complete before this one can.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            project_id: None,
            start_date,
            end_date,
            estimated_hours: 0.0,
            status: TaskStatus::default(),
            required_skills: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_required_skill(mut self, name: impl Into<String>) -> Self {
        self.required_skills.push(Skill::new(name));
        self
    }

    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.depends_on.push(task_id.into());
        self
    }

    /// The task's schedule as an inclusive window. Tasks whose end precedes
    /// their start yield an empty window, which every downstream computation
    /// treats as zero days.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_date, self.end_date)
    }
}

/// A commitment of one resource to one task for a number of hours over the
/// task's whole schedule. Several assignments may pair the same resource and
/// task; their hours add up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub resource_id: String,
    pub task_id: String,
    pub allocated_hours: f64,
}

impl Assignment {
    pub fn new(
        resource_id: impl Into<String>,
        task_id: impl Into<String>,
        allocated_hours: f64,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            task_id: task_id.into(),
            allocated_hours,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
