//! Admin edit/delete dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin tables render one button per row carrying the row's fields as
//! `data-*` attributes. Clicking a button opens a server-rendered modal; the
//! browser layer reads the attributes, builds a [`FormFill`] here, and writes
//! it into the modal's fields and form action.
//!
//! DESIGN
//! ======
//! Attribute access is a plain lookup closure so the mapping stays testable
//! without a DOM.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Links into the machine authorization pages get a hover hint.
pub const AUTHORIZATION_LINK_SELECTOR: &str = r#"a[href*="authorizations"]"#;
pub const AUTHORIZATION_TOOLTIP: &str = "Manage machine authorizations";

/// How a value lands in the target element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Input/textarea/select `value`.
    Value(String),
    /// Checkbox `checked`.
    Checked(bool),
    /// Plain `textContent`, used by delete confirmations.
    Text(String),
}

/// Writes to perform for one dialog opening.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFill {
    pub form_id: &'static str,
    pub action: String,
    pub fields: Vec<(&'static str, FieldValue)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminDialog {
    EditZone,
    DeleteZone,
    EditMachine,
    DeleteMachine,
    EditRfidUser,
    DeleteRfidUser,
}

impl AdminDialog {
    pub const ALL: [Self; 6] = [
        Self::EditZone,
        Self::DeleteZone,
        Self::EditMachine,
        Self::DeleteMachine,
        Self::EditRfidUser,
        Self::DeleteRfidUser,
    ];

    /// Selector of the buttons that open this dialog.
    #[must_use]
    pub fn trigger_selector(self) -> &'static str {
        match self {
            Self::EditZone => ".edit-zone-btn",
            Self::DeleteZone => ".delete-zone-btn",
            Self::EditMachine => ".edit-machine-btn",
            Self::DeleteMachine => ".delete-machine-btn",
            Self::EditRfidUser => ".edit-rfid-user-btn",
            Self::DeleteRfidUser => ".delete-rfid-user-btn",
        }
    }

    fn id_attr(self) -> &'static str {
        match self {
            Self::EditZone | Self::DeleteZone => "data-zone-id",
            Self::EditMachine | Self::DeleteMachine => "data-machine-id",
            Self::EditRfidUser | Self::DeleteRfidUser => "data-user-id",
        }
    }

    fn form_id(self) -> &'static str {
        match self {
            Self::EditZone => "editZoneForm",
            Self::DeleteZone => "deleteZoneForm",
            Self::EditMachine => "editMachineForm",
            Self::DeleteMachine => "deleteMachineForm",
            Self::EditRfidUser => "editRfidUserForm",
            Self::DeleteRfidUser => "deleteRfidUserForm",
        }
    }

    fn action(self, id: &str) -> String {
        let route = match self {
            Self::EditZone => "/zones/edit",
            Self::DeleteZone => "/zones/delete",
            Self::EditMachine => "/machines/edit",
            Self::DeleteMachine => "/machines/delete",
            Self::EditRfidUser => "/users/edit_rfid",
            Self::DeleteRfidUser => "/users/delete_rfid",
        };
        format!("{route}/{id}")
    }

    /// Build the fill for a trigger whose attributes are read through `attr`.
    ///
    /// Returns `None` when the row id attribute is missing or blank; missing
    /// display attributes become empty strings.
    pub fn fill(self, attr: impl Fn(&str) -> Option<String>) -> Option<FormFill> {
        let id = attr(self.id_attr()).filter(|v| !v.trim().is_empty())?;
        let text = |name: &str| attr(name).unwrap_or_default();

        let fields = match self {
            Self::EditZone => vec![
                ("edit_zone_name", FieldValue::Value(text("data-zone-name"))),
                ("edit_zone_description", FieldValue::Value(text("data-zone-description"))),
            ],
            Self::DeleteZone => vec![("delete_zone_name", FieldValue::Text(text("data-zone-name")))],
            Self::EditMachine => vec![
                ("edit_machine_id", FieldValue::Value(text("data-machine-mid"))),
                ("edit_machine_name", FieldValue::Value(text("data-machine-name"))),
                ("edit_machine_description", FieldValue::Value(text("data-machine-description"))),
                ("edit_machine_zone_id", FieldValue::Value(text("data-machine-zone-id"))),
                ("edit_machine_ip_address", FieldValue::Value(text("data-machine-ip-address"))),
            ],
            Self::DeleteMachine => vec![("delete_machine_name", FieldValue::Text(text("data-machine-name")))],
            Self::EditRfidUser => vec![
                ("edit_name", FieldValue::Value(text("data-user-name"))),
                ("edit_email", FieldValue::Value(text("data-user-email"))),
                ("edit_active", FieldValue::Checked(text("data-user-active") == "True")),
            ],
            Self::DeleteRfidUser => vec![("delete_user_name", FieldValue::Text(text("data-user-name")))],
        };

        Some(FormFill {
            form_id: self.form_id(),
            action: self.action(id.trim()),
            fields,
        })
    }
}
