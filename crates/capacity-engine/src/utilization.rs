//! Prorated resource utilization over work days.
//!
//! Utilization answers "how loaded is this resource in this window?" as a
//! percentage of available hours. Allocated hours are prorated by work-day
//! overlap: an assignment contributes its hours scaled by the share of the
//! task's work days that fall inside the query window. Weekends never carry
//! hours, in either the numerator or the denominator.
//!
//! All functions here are pure: they take the full slices of assignments and
//! tasks and never consult a clock or a store.

use std::collections::HashMap;

use crate::calendar::TimeWindow;
use crate::model::{Assignment, Resource, Task};

/// Hours the resource can work inside the window, derived from its weekly
/// capacity: `capacity / 5` hours per work day, times the window's work days.
/// Negative capacities clamp to zero.
pub fn available_hours(resource: &Resource, window: TimeWindow) -> f64 {
    (f64::from(resource.capacity) / 5.0 * f64::from(window.work_days())).max(0.0)
}

/// Percentage of the resource's available hours consumed by its assignments
/// inside `window`, rounded to one decimal place.
///
/// Each assignment is prorated: `allocated_hours * overlap_work_days /
/// task_work_days`, where overlap is the intersection of the task's schedule
/// with the window. Assignments belonging to other resources are ignored, as
/// are assignments whose task id matches nothing in `tasks`, tasks that do
/// not intersect the window, and tasks with zero work days. A resource with
/// zero available hours reports 0.0 no matter what is assigned. Values above
/// 100.0 are real and reported as-is; they mean overcommitment.
///
/// # Examples
///
/// ```
/// use capacity_engine::{utilization_percentage, Assignment, Resource, Task, TimeWindow};
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
/// let resource = Resource::new("r1", "Ada", 40);
/// let tasks = vec![Task::new("t1", monday, friday)];
/// let assignments = vec![Assignment::new("r1", "t1", 40.0)];
///
/// let window = TimeWindow::new(monday, friday);
/// assert_eq!(utilization_percentage(&resource, &assignments, &tasks, window), 100.0);
/// ```
pub fn utilization_percentage(
    resource: &Resource,
    assignments: &[Assignment],
    tasks: &[Task],
    window: TimeWindow,
) -> f64 {
    let available = available_hours(resource, window);
    if available <= 0.0 {
        return 0.0;
    }

    let tasks_by_id: HashMap<&str, &Task> =
        tasks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut total = 0.0;
    for assignment in assignments.iter().filter(|a| a.resource_id == resource.id) {
        let Some(task) = tasks_by_id.get(assignment.task_id.as_str()) else {
            continue;
        };
        let Some(overlap) = task.window().intersect(window) else {
            continue;
        };
        let full_task_days = task.window().work_days();
        if full_task_days == 0 {
            continue;
        }
        total += assignment.allocated_hours * f64::from(overlap.work_days())
            / f64::from(full_task_days);
    }

    round_one_decimal((total / available * 100.0).max(0.0))
}

/// Utilization for the Monday-start week containing `today`.
pub fn current_utilization(
    resource: &Resource,
    assignments: &[Assignment],
    tasks: &[Task],
    today: chrono::NaiveDate,
) -> f64 {
    utilization_percentage(resource, assignments, tasks, TimeWindow::week_of(today))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Monday..Friday, February 16-20, 2026.
    fn work_week() -> TimeWindow {
        TimeWindow::new(date(2026, 2, 16), date(2026, 2, 20))
    }

    fn full_week_task(id: &str) -> Task {
        Task::new(id, date(2026, 2, 16), date(2026, 2, 20))
    }

    #[test]
    fn test_available_hours_standard_week() {
        let r = Resource::new("r1", "Ada", 40);
        assert_eq!(available_hours(&r, work_week()), 40.0);
    }

    #[test]
    fn test_available_hours_partial_window() {
        let r = Resource::new("r1", "Ada", 40);
        // Wed..Fri = 3 work days at 8h/day
        let w = TimeWindow::new(date(2026, 2, 18), date(2026, 2, 20));
        assert_eq!(available_hours(&r, w), 24.0);
    }

    #[test]
    fn test_available_hours_negative_capacity_clamps() {
        let r = Resource::new("r1", "Ada", -10);
        assert_eq!(available_hours(&r, work_week()), 0.0);
    }

    #[test]
    fn test_full_allocation_is_one_hundred_percent() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            100.0
        );
    }

    #[test]
    fn test_single_day_window_prorates_both_sides() {
        // One day of a five-day task carries 40/5 = 8h; one day of capacity
        // is also 8h, so the ratio holds at 100%.
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        let wednesday = TimeWindow::new(date(2026, 2, 18), date(2026, 2, 18));
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, wednesday),
            100.0
        );
    }

    #[test]
    fn test_half_allocation() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 20.0)];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            50.0
        );
    }

    #[test]
    fn test_overcommitment_exceeds_one_hundred() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1"), full_week_task("t2")];
        let assignments = vec![
            Assignment::new("r1", "t1", 40.0),
            Assignment::new("r1", "t2", 20.0),
        ];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            150.0
        );
    }

    #[test]
    fn test_duplicate_assignments_sum() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![
            Assignment::new("r1", "t1", 20.0),
            Assignment::new("r1", "t1", 20.0),
        ];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            100.0
        );
    }

    #[test]
    fn test_other_resources_assignments_ignored() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![
            Assignment::new("r1", "t1", 20.0),
            Assignment::new("r2", "t1", 40.0),
        ];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            50.0
        );
    }

    #[test]
    fn test_unknown_task_id_contributes_nothing() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![
            Assignment::new("r1", "t1", 20.0),
            Assignment::new("r1", "ghost", 80.0),
        ];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            50.0
        );
    }

    #[test]
    fn test_task_outside_window_contributes_nothing() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![Task::new("t1", date(2026, 3, 2), date(2026, 3, 6))];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            0.0
        );
    }

    #[test]
    fn test_weekend_only_task_contributes_nothing() {
        // Sat-Sun task has zero work days; its hours cannot be prorated.
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![Task::new("t1", date(2026, 2, 21), date(2026, 2, 22))];
        let assignments = vec![Assignment::new("r1", "t1", 16.0)];
        let w = TimeWindow::new(date(2026, 2, 16), date(2026, 2, 22));
        assert_eq!(utilization_percentage(&r, &assignments, &tasks, w), 0.0);
    }

    #[test]
    fn test_zero_capacity_reports_zero() {
        let r = Resource::new("r1", "Ada", 0);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, work_week()),
            0.0
        );
    }

    #[test]
    fn test_weekend_window_reports_zero() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        let weekend = TimeWindow::new(date(2026, 2, 21), date(2026, 2, 22));
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, weekend),
            0.0
        );
    }

    #[test]
    fn test_inverted_window_reports_zero() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        let inverted = TimeWindow::new(date(2026, 2, 20), date(2026, 2, 16));
        assert_eq!(
            utilization_percentage(&r, &assignments, &tasks, inverted),
            0.0
        );
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 10h over 24h available = 41.666..% → 41.7
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![Task::new("t1", date(2026, 2, 18), date(2026, 2, 20))];
        let assignments = vec![Assignment::new("r1", "t1", 10.0)];
        let w = TimeWindow::new(date(2026, 2, 18), date(2026, 2, 20));
        assert_eq!(utilization_percentage(&r, &assignments, &tasks, w), 41.7);
    }

    #[test]
    fn test_current_utilization_uses_week_of_today() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 40.0)];
        // Any day of that week gives the same answer, including the weekend.
        assert_eq!(
            current_utilization(&r, &assignments, &tasks, date(2026, 2, 18)),
            100.0
        );
        assert_eq!(
            current_utilization(&r, &assignments, &tasks, date(2026, 2, 22)),
            100.0
        );
    }

    #[test]
    fn test_empty_inputs_report_zero() {
        let r = Resource::new("r1", "Ada", 40);
        assert_eq!(utilization_percentage(&r, &[], &[], work_week()), 0.0);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let r = Resource::new("r1", "Ada", 40);
        let tasks = vec![full_week_task("t1")];
        let assignments = vec![Assignment::new("r1", "t1", 27.0)];
        let first = utilization_percentage(&r, &assignments, &tasks, work_week());
        let second = utilization_percentage(&r, &assignments, &tasks, work_week());
        assert_eq!(first, second);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn utilization_is_never_negative(
                capacity in -50i32..200,
                hours in 0.0f64..500.0,
            ) {
                let r = Resource::new("r1", "Ada", capacity);
                let tasks = vec![full_week_task("t1")];
                let assignments = vec![Assignment::new("r1", "t1", hours)];
                let pct = utilization_percentage(&r, &assignments, &tasks, work_week());
                prop_assert!(pct >= 0.0);
            }

            #[test]
            fn utilization_scales_linearly_with_hours(hours in 0.0f64..160.0) {
                let r = Resource::new("r1", "Ada", 40);
                let tasks = vec![full_week_task("t1")];
                let assignments = vec![Assignment::new("r1", "t1", hours)];
                let pct = utilization_percentage(&r, &assignments, &tasks, work_week());
                let expected = (hours / 40.0 * 100.0 * 10.0).round() / 10.0;
                prop_assert!((pct - expected).abs() < 1e-9);
            }
        }
    }
}
