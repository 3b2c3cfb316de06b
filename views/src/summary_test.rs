use wire::{SessionInfo, ZoneRef};

use super::*;

fn session(name: &str) -> SessionInfo {
    SessionInfo {
        user_name: name.to_owned(),
        is_lead: false,
        start_time: None,
    }
}

fn machine(id: &str, status: &str, area: i64, zone: i64, sessions: usize) -> MachineSnapshot {
    MachineSnapshot {
        id: None,
        machine_id: id.to_owned(),
        name: None,
        status: status.to_owned(),
        warning_status: WarningStatus::Normal,
        current_user: (sessions > 0).then(|| "someone".to_owned()),
        last_activity: None,
        lead_operator_id: None,
        lead_operator_name: None,
        area_id: Some(area),
        zone_id: Some(zone),
        active_sessions: (0..sessions).map(|i| session(&format!("u{i}"))).collect(),
    }
}

fn hierarchy() -> Vec<AreaNode> {
    vec![
        AreaNode {
            id: 1,
            name: "North".to_owned(),
            zones: vec![
                ZoneRef { id: 10, name: "Machining".to_owned() },
                ZoneRef { id: 11, name: "Paint".to_owned() },
            ],
        },
        AreaNode {
            id: 2,
            name: "South".to_owned(),
            zones: vec![ZoneRef { id: 20, name: "Assembly".to_owned() }],
        },
    ]
}

// =============================================================
// Area summaries
// =============================================================

#[test]
fn area_totals_count_active_machines_and_sessions() {
    let machines = vec![
        machine("01", "active", 1, 10, 2),
        machine("02", "idle", 1, 10, 1),
        machine("03", "active", 2, 20, 0),
    ];
    let summary = summarize_areas(&hierarchy(), &machines);

    assert_eq!(summary[0].active_machines, 1);
    assert_eq!(summary[0].sessions, 3);
    assert_eq!(summary[1].active_machines, 1);
    assert_eq!(summary[1].sessions, 0);
}

#[test]
fn empty_zones_are_omitted_but_areas_stay() {
    let machines = vec![machine("01", "active", 1, 10, 0), machine("02", "offline", 1, 11, 0)];
    let summary = summarize_areas(&hierarchy(), &machines);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].zones.len(), 1);
    assert_eq!(summary[0].zones[0].name, "Machining");
    assert!(summary[1].zones.is_empty());
}

#[test]
fn zone_with_sessions_but_no_active_machine_is_kept() {
    let machines = vec![machine("05", "idle", 1, 11, 1)];
    let summary = summarize_areas(&hierarchy(), &machines);
    assert_eq!(
        summary[0].zones,
        vec![ZoneSummary { id: 11, name: "Paint".to_owned(), active_machines: 0, sessions: 1 }]
    );
}

#[test]
fn machines_without_area_are_not_counted() {
    let mut loose = machine("09", "active", 1, 10, 1);
    loose.area_id = None;
    loose.zone_id = None;
    let summary = summarize_areas(&hierarchy(), &[loose]);
    assert!(summary.iter().all(|a| a.active_machines == 0 && a.sessions == 0));
}

// =============================================================
// Status counters
// =============================================================

#[test]
fn status_counts_bucket_each_machine_once() {
    let mut warned = machine("04", "idle", 1, 10, 0);
    warned.warning_status = WarningStatus::Timeout;
    let mut active_warned = machine("05", "active", 1, 10, 1);
    active_warned.warning_status = WarningStatus::Warning;

    let machines = vec![
        machine("01", "active", 1, 10, 1),
        machine("02", "offline", 1, 10, 0),
        machine("03", "idle", 1, 10, 0),
        warned,
        active_warned,
        machine("06", "warning", 2, 20, 0),
    ];
    let counts = StatusCounts::tally(&machines);
    assert_eq!(
        counts,
        StatusCounts { active: 2, idle: 1, warning: 2, offline: 1, active_users: 2 }
    );
    assert_eq!(counts.headline(), [2, 2, 2]);
}

#[test]
fn activity_text_uses_session_wording() {
    assert_eq!(activity_text(2, 1), "2 active \u{b7} 1 session");
    assert_eq!(activity_text(0, 3), "0 active \u{b7} 3 sessions");
}
