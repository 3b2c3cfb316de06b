//! Plain-text rendering of API responses for the terminal.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use views::card::status_label;
use views::summary::{AreaSummary, StatusCounts, activity_text};
use wire::{Area, MachineSnapshot};

pub fn area_line(area: &Area) -> String {
    match &area.code {
        Some(code) => format!("{:>4}  {} [{code}]", area.id, area.name),
        None => format!("{:>4}  {}", area.id, area.name),
    }
}

/// One machine per line: id, status label, current user, lead.
pub fn machine_line(machine: &MachineSnapshot) -> String {
    let user = machine.current_user.as_deref().unwrap_or("-");
    let lead = machine.lead_operator_name.as_deref().unwrap_or("-");
    format!(
        "{:<6} {:<24} {:<10} user={user} lead={lead}",
        machine.machine_id,
        machine.name.as_deref().unwrap_or(""),
        status_label(machine),
    )
}

pub fn counts_line(counts: &StatusCounts) -> String {
    format!(
        "users={} active={} idle={} warning={} offline={}",
        counts.active_users, counts.active, counts.idle, counts.warning, counts.offline
    )
}

/// Area blocks with indented zone lines.
pub fn summary_lines(summaries: &[AreaSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    for area in summaries {
        lines.push(format!("{}: {}", area.name, activity_text(area.active_machines, area.sessions)));
        for zone in &area.zones {
            lines.push(format!("  {}: {}", zone.name, activity_text(zone.active_machines, zone.sessions)));
        }
    }
    lines
}
