use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn edit_zone_fills_name_description_and_action() {
    let fill = AdminDialog::EditZone
        .fill(attrs(&[
            ("data-zone-id", "4"),
            ("data-zone-name", "Paint"),
            ("data-zone-description", "Booths"),
        ]))
        .expect("fill");
    assert_eq!(fill.form_id, "editZoneForm");
    assert_eq!(fill.action, "/zones/edit/4");
    assert_eq!(
        fill.fields,
        vec![
            ("edit_zone_name", FieldValue::Value("Paint".to_owned())),
            ("edit_zone_description", FieldValue::Value("Booths".to_owned())),
        ]
    );
}

#[test]
fn delete_dialogs_write_text_confirmation() {
    let fill = AdminDialog::DeleteMachine
        .fill(attrs(&[("data-machine-id", "12"), ("data-machine-name", "Lathe")]))
        .expect("fill");
    assert_eq!(fill.action, "/machines/delete/12");
    assert_eq!(fill.fields, vec![("delete_machine_name", FieldValue::Text("Lathe".to_owned()))]);
}

#[test]
fn edit_machine_uses_row_id_for_action_and_mid_for_field() {
    let fill = AdminDialog::EditMachine
        .fill(attrs(&[
            ("data-machine-id", "12"),
            ("data-machine-mid", "07"),
            ("data-machine-ip-address", "10.0.0.7"),
        ]))
        .expect("fill");
    assert_eq!(fill.action, "/machines/edit/12");
    assert_eq!(fill.fields[0], ("edit_machine_id", FieldValue::Value("07".to_owned())));
    assert_eq!(fill.fields[1], ("edit_machine_name", FieldValue::Value(String::new())));
    assert_eq!(fill.fields[4], ("edit_machine_ip_address", FieldValue::Value("10.0.0.7".to_owned())));
}

#[test]
fn rfid_user_active_flag_is_python_true_only() {
    let active = AdminDialog::EditRfidUser
        .fill(attrs(&[("data-user-id", "3"), ("data-user-active", "True")]))
        .expect("fill");
    assert_eq!(active.action, "/users/edit_rfid/3");
    assert_eq!(active.fields[2], ("edit_active", FieldValue::Checked(true)));

    let lower = AdminDialog::EditRfidUser
        .fill(attrs(&[("data-user-id", "3"), ("data-user-active", "true")]))
        .expect("fill");
    assert_eq!(lower.fields[2], ("edit_active", FieldValue::Checked(false)));
}

#[test]
fn missing_or_blank_id_yields_nothing() {
    assert_eq!(AdminDialog::DeleteRfidUser.fill(attrs(&[("data-user-name", "Al")])), None);
    assert_eq!(AdminDialog::DeleteZone.fill(attrs(&[("data-zone-id", " ")])), None);
}

#[test]
fn every_dialog_has_distinct_trigger() {
    let mut selectors: Vec<_> = AdminDialog::ALL.iter().map(|d| d.trigger_selector()).collect();
    selectors.sort_unstable();
    selectors.dedup();
    assert_eq!(selectors.len(), AdminDialog::ALL.len());
}

#[test]
fn authorization_links_match_by_href_fragment() {
    assert_eq!(AUTHORIZATION_LINK_SELECTOR, r#"a[href*="authorizations"]"#);
    assert_eq!(AUTHORIZATION_TOOLTIP, "Manage machine authorizations");
}
