//! capcheck: capacity and scheduling queries over a schedule snapshot.
//!
//! Loads a JSON snapshot of resources, tasks, and assignments, runs one
//! engine query, and prints the result as pretty JSON on stdout. Exit code 1
//! with a message on stderr for unknown ids, bad dates, or malformed input.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use capacity_engine::{
    conflict_report, parse_iso_date, utilization_report, OverlapEngine, Resource, Snapshot,
    TimeWindow,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "capcheck",
    version,
    about = "Capacity and scheduling queries over a schedule snapshot"
)]
struct Cli {
    /// Path to the schedule snapshot (JSON).
    #[arg(short, long)]
    snapshot: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reports a resource's prorated utilization over a date window.
    Utilization {
        /// Resource id.
        resource: String,
        /// Window start (YYYY-MM-DD); requires --end.
        #[arg(long)]
        start: Option<String>,
        /// Window end (YYYY-MM-DD); requires --start.
        #[arg(long)]
        end: Option<String>,
        /// Reference date (YYYY-MM-DD) whose Monday-start week is used when
        /// no explicit window is given. Defaults to today.
        #[arg(long)]
        today: Option<String>,
    },
    /// Checks a proposed task/resource pairing for conflicts.
    Conflicts {
        /// Task id.
        task: String,
        /// Resource id.
        resource: String,
    },
    /// Lists the UTC hours during which every listed resource is inside its
    /// local business hours.
    Overlap {
        /// Comma-separated resource ids.
        #[arg(long, value_delimiter = ',', required = true)]
        resources: Vec<String>,
        /// Anchor instant (RFC 3339, e.g. 2026-07-15T12:00:00Z). Defaults to
        /// now.
        #[arg(long)]
        at: Option<String>,
    },
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let raw = fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let snapshot = Snapshot::from_json(&raw)?;

    match cli.command {
        Commands::Utilization {
            resource,
            start,
            end,
            today,
        } => {
            let resource = snapshot.resource(&resource)?;
            let window = resolve_window(start.as_deref(), end.as_deref(), today.as_deref())?;
            let report = utilization_report(
                resource,
                &snapshot.assignments_for(&resource.id),
                &snapshot.tasks,
                window,
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Conflicts { task, resource } => {
            let task = snapshot.task(&task)?;
            let resource = snapshot.resource(&resource)?;
            let report = conflict_report(task, resource, &snapshot.assignments, &snapshot.tasks);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Overlap { resources, at } => {
            let team: Vec<&Resource> = resources
                .iter()
                .map(|id| snapshot.resource(id))
                .collect::<capacity_engine::Result<_>>()?;
            let anchor: DateTime<Utc> = match at.as_deref() {
                Some(s) => DateTime::parse_from_rfc3339(s)
                    .with_context(|| format!("parsing --at instant '{s}'"))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let hours = OverlapEngine::new().team_overlap_hours(team, anchor);
            let payload = serde_json::json!({
                "resources": resources,
                "anchor": anchor.to_rfc3339(),
                "overlap_hours_utc": hours,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}

/// Explicit start/end take priority; otherwise the week containing `today`
/// (or the actual current date). Giving only one of start/end is an error.
fn resolve_window(
    start: Option<&str>,
    end: Option<&str>,
    today: Option<&str>,
) -> Result<TimeWindow> {
    match (start, end) {
        (Some(s), Some(e)) => Ok(TimeWindow::parse(s, e)?),
        (None, None) => {
            let today = match today {
                Some(d) => parse_iso_date(d)?,
                None => Utc::now().date_naive(),
            };
            Ok(TimeWindow::week_of(today))
        }
        _ => bail!("--start and --end must be given together"),
    }
}
