//! A deserialized schedule: every resource, task, and assignment in one
//! value.
//!
//! The engine's computations take plain slices; [`Snapshot`] is the loading
//! and lookup layer in front of them. Lookups by id are the only place an
//! "unknown entity" error can arise, keeping the math itself infallible.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::{Assignment, Resource, Task};

/// Full schedule state, as read from a JSON document. All three collections
/// default to empty, so partial documents load cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Snapshot {
    /// Parses a snapshot from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Snapshot`] when the document is not valid JSON
    /// or does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| EngineError::Snapshot(e.to_string()))?;
        tracing::debug!(
            resources = snapshot.resources.len(),
            tasks = snapshot.tasks.len(),
            assignments = snapshot.assignments.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// The resource with this id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownResource`] when no resource matches.
    pub fn resource(&self, id: &str) -> Result<&Resource> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::UnknownResource(id.to_string()))
    }

    /// The task with this id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTask`] when no task matches.
    pub fn task(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| EngineError::UnknownTask(id.to_string()))
    }

    /// All assignments belonging to one resource, cloned out so callers can
    /// hand them to the computation functions without borrowing the snapshot.
    pub fn assignments_for(&self, resource_id: &str) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.resource_id == resource_id)
            .cloned()
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
