//! Area/zone summaries and dashboard status counters.
//!
//! Both are full aggregations over one machine snapshot list, recomputed on
//! every refresh.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use wire::{AreaNode, MachineSnapshot, WarningStatus};

use crate::card::session_count_text;

/// Active-machine and session totals for one zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneSummary {
    pub id: i64,
    pub name: String,
    pub active_machines: usize,
    pub sessions: usize,
}

/// Totals for one area plus its non-empty zones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaSummary {
    pub id: i64,
    pub name: String,
    pub active_machines: usize,
    pub sessions: usize,
    /// Zones with at least one active machine or session, in hierarchy order.
    pub zones: Vec<ZoneSummary>,
}

fn tally<'a, I>(machines: I) -> (usize, usize)
where
    I: IntoIterator<Item = &'a MachineSnapshot>,
{
    machines.into_iter().fold((0, 0), |(active, sessions), m| {
        (active + usize::from(m.is_active()), sessions + m.active_sessions.len())
    })
}

/// Aggregate `machines` under each area and zone of `hierarchy`.
///
/// Areas are always listed; zones with zero active machines and zero sessions
/// are omitted.
#[must_use]
pub fn summarize_areas(hierarchy: &[AreaNode], machines: &[MachineSnapshot]) -> Vec<AreaSummary> {
    hierarchy
        .iter()
        .map(|area| {
            let (active_machines, sessions) =
                tally(machines.iter().filter(|m| m.area_id == Some(area.id)));
            let zones = area
                .zones
                .iter()
                .filter_map(|zone| {
                    let (active_machines, sessions) =
                        tally(machines.iter().filter(|m| m.zone_id == Some(zone.id)));
                    if active_machines == 0 && sessions == 0 {
                        return None;
                    }
                    Some(ZoneSummary {
                        id: zone.id,
                        name: zone.name.clone(),
                        active_machines,
                        sessions,
                    })
                })
                .collect();
            AreaSummary {
                id: area.id,
                name: area.name.clone(),
                active_machines,
                sessions,
                zones,
            }
        })
        .collect()
}

/// Count line shown next to an area or zone, e.g. `"2 active \u{b7} 1 session"`.
#[must_use]
pub fn activity_text(active_machines: usize, sessions: usize) -> String {
    format!("{active_machines} active \u{b7} {}", session_count_text(sessions))
}

/// Headline counters shown above the machine grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub idle: usize,
    pub warning: usize,
    pub offline: usize,
    /// Machines with a logged-in user.
    pub active_users: usize,
}

impl StatusCounts {
    /// Bucket every machine into exactly one status; `active` wins over warnings.
    #[must_use]
    pub fn tally(machines: &[MachineSnapshot]) -> Self {
        let mut counts = Self::default();
        for machine in machines {
            let warned = machine.status == "warning"
                || matches!(machine.warning_status, WarningStatus::Warning | WarningStatus::Timeout);
            if machine.is_active() {
                counts.active += 1;
            } else if warned {
                counts.warning += 1;
            } else if machine.is_offline() {
                counts.offline += 1;
            } else {
                counts.idle += 1;
            }
            if machine.current_user.is_some() {
                counts.active_users += 1;
            }
        }
        counts
    }

    /// Values for the `.dashboard-stats h2` headings, in page order.
    #[must_use]
    pub fn headline(&self) -> [usize; 3] {
        [self.active_users, self.active, self.warning]
    }
}
