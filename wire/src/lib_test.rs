use super::*;

fn snapshot_json() -> &'static str {
    r#"[
        {
            "id": 3,
            "machine_id": "07",
            "name": "Lathe",
            "status": "active",
            "warning_status": "normal",
            "current_user": "Alice",
            "last_activity": "2024-05-01T13:45:12.123456",
            "lead_operator_id": 11,
            "lead_operator_name": "Alice",
            "area_id": 2,
            "zone_id": 5,
            "active_sessions": [
                {"user_name": "Alice", "is_lead": true, "start_time": "2024-05-01T12:00:00"},
                {"user_name": "Bob", "login_time": "2024-05-01T12:30:00"}
            ]
        },
        {"machine_id": 12, "status": "offline"}
    ]"#
}

// =============================================================
// Machine snapshots
// =============================================================

#[test]
fn decode_machines_reads_full_snapshot() {
    let machines = decode_machines(snapshot_json()).expect("decode");
    assert_eq!(machines.len(), 2);

    let lathe = &machines[0];
    assert_eq!(lathe.machine_id, "07");
    assert_eq!(lathe.name.as_deref(), Some("Lathe"));
    assert!(lathe.is_active());
    assert!(lathe.has_lead());
    assert_eq!(lathe.warning_status, WarningStatus::Normal);
    assert_eq!(lathe.active_sessions.len(), 2);
    assert!(lathe.active_sessions[0].is_lead);
}

#[test]
fn session_accepts_login_time_alias_and_defaults_is_lead() {
    let machines = decode_machines(snapshot_json()).expect("decode");
    let bob = &machines[0].active_sessions[1];
    assert_eq!(bob.user_name, "Bob");
    assert!(!bob.is_lead);
    assert_eq!(bob.start_time.as_deref(), Some("2024-05-01T12:30:00"));
}

#[test]
fn numeric_machine_id_is_normalized_to_string() {
    let machines = decode_machines(snapshot_json()).expect("decode");
    let press = &machines[1];
    assert_eq!(press.machine_id, "12");
    assert!(press.is_offline());
    assert!(!press.has_lead());
    assert!(press.current_user.is_none());
    assert!(press.active_sessions.is_empty());
}

#[test]
fn warning_status_unknown_and_null_fall_back_to_normal() {
    let body = r#"[
        {"machine_id": "1", "status": "idle", "warning_status": "sleepy"},
        {"machine_id": "2", "status": "idle", "warning_status": null},
        {"machine_id": "3", "status": "idle", "warning_status": "timeout"}
    ]"#;
    let machines = decode_machines(body).expect("decode");
    assert_eq!(machines[0].warning_status, WarningStatus::Normal);
    assert_eq!(machines[1].warning_status, WarningStatus::Normal);
    assert_eq!(machines[2].warning_status, WarningStatus::Timeout);
}

#[test]
fn boolean_machine_id_is_rejected() {
    let err = decode_machines(r#"[{"machine_id": true, "status": "idle"}]"#);
    assert!(matches!(err, Err(WireError::Decode(_))));
}

#[test]
fn picker_label_includes_name_when_present() {
    let machines = decode_machines(snapshot_json()).expect("decode");
    assert_eq!(machines[0].picker_label(), "Lathe (#07)");
    assert_eq!(machines[1].picker_label(), "#12");
}

// =============================================================
// Areas
// =============================================================

#[test]
fn decode_areas_ignores_unknown_fields() {
    let areas = decode_areas(r#"[{"id": 1, "name": "North", "code": "N", "extra": 9}]"#).expect("decode");
    assert_eq!(areas[0].id, 1);
    assert_eq!(areas[0].code.as_deref(), Some("N"));
    assert_eq!(areas[0].machine_count, None);
}

#[test]
fn decode_hierarchy_defaults_missing_zones() {
    let nodes = decode_hierarchy(r#"[{"id": 1, "name": "North"}, {"id": 2, "name": "South", "zones": [{"id": 4, "name": "Paint"}]}]"#)
        .expect("decode");
    assert!(nodes[0].zones.is_empty());
    assert_eq!(nodes[1].zones[0].name, "Paint");
}

// =============================================================
// Text verdicts
// =============================================================

#[test]
fn scan_verdict_classifies_body_text() {
    assert_eq!(ScanVerdict::from_body("ALLOW"), ScanVerdict::Allow);
    assert_eq!(ScanVerdict::from_body("result: DENY\n"), ScanVerdict::Deny);
    assert_eq!(ScanVerdict::from_body(" maybe \n"), ScanVerdict::Unknown("maybe".to_owned()));
}

#[test]
fn logout_outcome_classifies_body_text() {
    assert_eq!(LogoutOutcome::from_body("LOGOUT ok"), LogoutOutcome::LoggedOut);
    assert_eq!(LogoutOutcome::from_body("nope"), LogoutOutcome::Unexpected("nope".to_owned()));
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn rfid_endpoints_carry_raw_query_pairs() {
    let scan = Endpoint::check_user("AB 12", "07");
    assert_eq!(scan.path, "/api/check_user");
    assert_eq!(scan.query, vec![("rfid", "AB 12".to_owned()), ("machine_id", "07".to_owned())]);

    let beat = Endpoint::heartbeat("07");
    assert_eq!(beat.query, vec![("machine_id", "07".to_owned()), ("activity", "1".to_owned())]);
}

#[test]
fn join_trims_trailing_slash_on_base() {
    assert_eq!(Endpoint::areas().join("http://host:5000/"), "http://host:5000/api/areas");
    assert_eq!(Endpoint::area_hierarchy().join(""), "/api/areas/hierarchy");
}
