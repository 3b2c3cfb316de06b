use views::summary::summarize_areas;

use super::*;

fn machines() -> Vec<MachineSnapshot> {
    wire::decode_machines(
        r#"[
            {"machine_id": "07", "name": "Lathe", "status": "active", "current_user": "Alice",
             "lead_operator_id": 4, "lead_operator_name": "Alice", "area_id": 3, "zone_id": 9,
             "active_sessions": [{"user_name": "Alice", "is_lead": true}]},
            {"machine_id": "12", "status": "active", "area_id": 3, "zone_id": 10}
        ]"#,
    )
    .expect("machine fixture")
}

#[test]
fn machine_line_shows_label_and_people() {
    let machines = machines();
    let line = machine_line(&machines[0]);
    assert!(line.starts_with("07"));
    assert!(line.contains("Lathe"));
    assert!(line.contains("Active"));
    assert!(line.ends_with("user=Alice lead=Alice"));
}

#[test]
fn machine_line_flags_missing_lead() {
    let machines = machines();
    let line = machine_line(&machines[1]);
    assert!(line.contains("No Lead"));
    assert!(line.ends_with("user=- lead=-"));
}

#[test]
fn counts_line_lists_every_bucket() {
    let counts = StatusCounts::tally(&machines());
    assert_eq!(counts_line(&counts), "users=1 active=2 idle=0 warning=0 offline=0");
}

#[test]
fn summary_indents_zones_under_areas() {
    let hierarchy = wire::decode_hierarchy(
        r#"[{"id": 3, "name": "North", "zones": [{"id": 9, "name": "Paint"}, {"id": 11, "name": "Empty"}]}]"#,
    )
    .expect("hierarchy fixture");
    let lines = summary_lines(&summarize_areas(&hierarchy, &machines()));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("North: 2 active"));
    assert!(lines[1].starts_with("  Paint: 1 active"));
}

#[test]
fn area_line_includes_code_when_present() {
    let areas = wire::decode_areas(r#"[{"id": 3, "name": "North", "code": "N1"}, {"id": 5, "name": "South"}]"#)
        .expect("area fixture");
    assert_eq!(area_line(&areas[0]), "   3  North [N1]");
    assert_eq!(area_line(&areas[1]), "   5  South");
}
