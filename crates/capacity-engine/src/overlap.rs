//! Cross-timezone business-hours overlap.
//!
//! Answers two questions about a distributed team: "is this instant inside a
//! resource's local business hours?" and "which UTC hours does the whole team
//! share?". All conversions run through an [`OverlapEngine`], which owns the
//! business-hours policy and a [`ZoneResolver`] mapping IANA names to
//! concrete zones. Tests swap in a stub resolver; production uses
//! [`IanaZones`], backed by the bundled tz database.
//!
//! Timezone failures never escalate: a missing or unresolvable zone name
//! falls back to UTC with a warning, and a business-hours boundary that lands
//! in a DST gap degrades that pair to zero shared hours.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::model::Resource;

/// Maps a timezone name to a concrete zone. Injected into the engine so the
/// zone database is a capability, not an ambient global.
pub trait ZoneResolver {
    /// The zone for `name`, or `None` when the name is unknown.
    fn resolve(&self, name: &str) -> Option<Tz>;
}

/// The default resolver: parses IANA names ("America/New_York") against the
/// timezone database compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaZones;

impl ZoneResolver for IanaZones {
    fn resolve(&self, name: &str) -> Option<Tz> {
        name.parse::<Tz>().ok()
    }
}

/// Local business hours as a half-open range `[start_hour, end_hour)` of
/// whole hours. The default is 9:00 to 17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl BusinessHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

/// A UTC instant rendered in a resource's local zone. `used_fallback` is set
/// when the resource declared no timezone or declared one the resolver did
/// not recognize; in both cases `local` is the instant in UTC.
#[derive(Debug, Clone)]
pub struct LocalTime {
    pub local: DateTime<Tz>,
    pub used_fallback: bool,
}

/// Business-hours policy plus zone resolution, bundled so every overlap
/// question is answered against one consistent configuration.
#[derive(Debug, Clone)]
pub struct OverlapEngine<R = IanaZones> {
    resolver: R,
    hours: BusinessHours,
}

impl OverlapEngine<IanaZones> {
    /// Engine with the IANA resolver and 9-to-17 business hours.
    pub fn new() -> Self {
        Self {
            resolver: IanaZones,
            hours: BusinessHours::default(),
        }
    }
}

impl Default for OverlapEngine<IanaZones> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ZoneResolver> OverlapEngine<R> {
    /// Replaces the business-hours policy.
    pub fn with_hours(mut self, hours: BusinessHours) -> Self {
        self.hours = hours;
        self
    }

    /// Replaces the zone resolver, keeping the business-hours policy.
    pub fn with_resolver<S: ZoneResolver>(self, resolver: S) -> OverlapEngine<S> {
        OverlapEngine {
            resolver,
            hours: self.hours,
        }
    }

    /// Renders `instant` in the resource's local zone, falling back to UTC
    /// when no zone is declared or the declared name does not resolve.
    pub fn local_time(&self, resource: &Resource, instant: DateTime<Utc>) -> LocalTime {
        let (tz, used_fallback) = self.zone_for(resource);
        LocalTime {
            local: instant.with_timezone(&tz),
            used_fallback,
        }
    }

    /// Whether `instant` falls on a local work day (Monday through Friday)
    /// inside the local business hours.
    pub fn is_business_hours(&self, resource: &Resource, instant: DateTime<Utc>) -> bool {
        let local = self.local_time(resource, instant).local;
        local.weekday().num_days_from_monday() < 5
            && local.hour() >= self.hours.start_hour
            && local.hour() < self.hours.end_hour
    }

    /// Whole hours of shared business time between two resources on the
    /// anchor's day, computed from each resource's business-hours boundaries
    /// converted to UTC hour numbers.
    ///
    /// Boundaries are compared as hour-of-day only. A zone whose business
    /// window crosses UTC midnight (its UTC start hour exceeds its UTC end
    /// hour) reports zero against everyone, as does a boundary that lands in
    /// a DST gap. [`Self::team_overlap_hours`] scans actual instants and does
    /// not share this simplification.
    pub fn pairwise_overlap_hours(
        &self,
        a: &Resource,
        b: &Resource,
        anchor: DateTime<Utc>,
    ) -> u32 {
        let Some((start_a, end_a)) = self.utc_business_bounds(a, anchor) else {
            return 0;
        };
        let Some((start_b, end_b)) = self.utc_business_bounds(b, anchor) else {
            return 0;
        };
        end_a.min(end_b).saturating_sub(start_a.max(start_b))
    }

    /// The UTC hours of the anchor's UTC day during which *every* resource is
    /// inside its local business hours. Empty for fewer than two resources.
    ///
    /// Each of the 24 candidate hours is checked as a real instant, so
    /// weekday boundaries and DST are handled per-zone per-hour.
    pub fn team_overlap_hours<'a, I>(&self, resources: I, anchor: DateTime<Utc>) -> Vec<u32>
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        let team: Vec<&Resource> = resources.into_iter().collect();
        if team.len() < 2 {
            return Vec::new();
        }
        let date = anchor.date_naive();
        (0..24)
            .filter(|&hour| {
                utc_instant(date, hour)
                    .is_some_and(|instant| team.iter().all(|r| self.is_business_hours(r, instant)))
            })
            .collect()
    }

    /// Business-hours boundaries for the resource's local date at the anchor,
    /// as UTC hour numbers. `None` when the window wraps UTC midnight or a
    /// boundary does not exist locally.
    fn utc_business_bounds(&self, resource: &Resource, anchor: DateTime<Utc>) -> Option<(u32, u32)> {
        let (tz, _) = self.zone_for(resource);
        let local_date = anchor.with_timezone(&tz).date_naive();
        let start = utc_hour_of(tz, local_date, self.hours.start_hour)?;
        let end = utc_hour_of(tz, local_date, self.hours.end_hour)?;
        if start > end {
            return None;
        }
        Some((start, end))
    }

    fn zone_for(&self, resource: &Resource) -> (Tz, bool) {
        let Some(name) = resource.timezone.as_deref() else {
            return (Tz::UTC, true);
        };
        match self.resolver.resolve(name) {
            Some(tz) => (tz, false),
            None => {
                tracing::warn!(
                    resource = %resource.id,
                    timezone = %name,
                    "unknown timezone, falling back to UTC"
                );
                (Tz::UTC, true)
            }
        }
    }
}

/// The UTC hour number at which `hour` o'clock occurs on `date` in `tz`.
/// `None` when that local time does not exist (DST gap, hour out of range).
fn utc_hour_of(tz: Tz, date: NaiveDate, hour: u32) -> Option<u32> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(local.with_timezone(&Utc).hour())
}

fn utc_instant(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    Some(Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0)?))
}

// ── Tests ───────────────────────────────────────────────────────────────────
