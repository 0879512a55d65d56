//! # capacity-engine
//!
//! Deterministic capacity and scheduling computation for resource planning.
//!
//! The engine answers three questions about a schedule of resources, tasks,
//! and assignments: how utilized is a resource over a date window (prorated
//! by work-day overlap), which business hours does a distributed team share
//! across timezones, and what conflicts would a proposed assignment create
//! (missing skills, overload, incomplete dependencies).
//!
//! Every computation is a pure function of its inputs. Reference dates and
//! instants are always explicit parameters, timezone resolution is an
//! injected capability, and malformed data degrades to zero-valued results
//! instead of panicking. Errors exist only at the boundary: parsing dates,
//! loading a [`Snapshot`], and resolving entity ids.
//!
//! ## Modules
//!
//! - [`calendar`] — Inclusive date windows and work-day counting
//! - [`model`] — Resources, skills, tasks, and assignments
//! - [`utilization`] — Prorated utilization percentages over a window
//! - [`overlap`] — Business-hours checks and cross-timezone team overlap
//! - [`conflict`] — Skill, utilization, and dependency conflict checks
//! - [`snapshot`] — JSON schedule loading and id lookups
//! - [`report`] — Serializable report payloads
//! - [`error`] — Error types

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod model;
pub mod overlap;
pub mod report;
pub mod snapshot;
pub mod utilization;

pub use calendar::{parse_iso_date, TimeWindow};
pub use conflict::{
    check_conflicts, ConflictFinding, ConflictKind, HIGH_UTILIZATION_THRESHOLD,
};
pub use error::{EngineError, Result};
pub use model::{Assignment, Resource, Skill, Task, TaskStatus};
pub use overlap::{BusinessHours, IanaZones, LocalTime, OverlapEngine, ZoneResolver};
pub use report::{conflict_report, utilization_report, ConflictReport, UtilizationReport};
pub use snapshot::Snapshot;
pub use utilization::{available_hours, current_utilization, utilization_percentage};
