//! Machine-card view derivation and reconciliation.
//!
//! DESIGN
//! ======
//! A [`CardView`] is the complete derived render state of one dashboard card.
//! It is rebuilt from scratch for every snapshot, so stale classes can never
//! accumulate. [`reconcile`] compares the previously applied view with the new
//! one and emits only the [`CardChange`]s a renderer must perform, in the
//! fixed order card class, indicator, label, user block, session block.
//!
//! Border priority, lowest to highest: status border, missing-lead override,
//! warning/timeout override. The label follows the same priority.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use wire::{MachineSnapshot, WarningStatus};

use crate::clock::Clock;

/// Classes every card carries before status-derived classes are added.
pub const CARD_BASE_CLASS: &str = "card h-100 machine-card";
/// Base class of the status indicator dot.
pub const INDICATOR_BASE_CLASS: &str = "machine-status";
/// Marker rendered next to the lead operator's session.
pub const LEAD_MARKER: &str = "\u{2605}";

/// Server-rendered `.last-activity` spans carry their raw timestamp here.
pub const ACTIVITY_TIMESTAMP_ATTR: &str = "data-timestamp";

/// Local `HH:MM` for a server-rendered activity timestamp. Blank or
/// unparsable values leave the server text in place.
#[must_use]
pub fn rendered_activity_time(raw: Option<&str>, clock: &Clock) -> Option<String> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
    clock.local_hh_mm(raw)
}

/// DOM id of the wrapper holding a machine's card.
#[must_use]
pub fn card_element_id(machine_id: &str) -> String {
    format!("machine-{machine_id}")
}

/// One row of the active-session list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionLine {
    pub user_name: String,
    pub is_lead: bool,
    /// Relative time since the session started, when the start is known.
    pub since: Option<String>,
}

impl SessionLine {
    /// Rendered row text, e.g. `"Alice ★ · 2m"`.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.user_name.clone();
        if self.is_lead {
            out.push(' ');
            out.push_str(LEAD_MARKER);
        }
        if let Some(since) = &self.since {
            out.push_str(" \u{b7} ");
            out.push_str(since);
        }
        out
    }
}

/// Derived render state for one machine card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub card_class: String,
    pub indicator_class: String,
    pub label: String,
    /// Current user line; `None` removes it.
    pub user_name: Option<String>,
    /// Local `HH:MM` of the last activity; `None` removes the line.
    pub last_activity: Option<String>,
    /// Lead operator name; `Some` renders the LEAD badge and lead line.
    pub lead_name: Option<String>,
    /// "No lead operator assigned" warning inside the user block.
    pub no_lead_warning: bool,
    /// Static "No active user" line.
    pub no_user: bool,
    /// Session block; `None` removes the list and its count badge.
    pub sessions: Option<Vec<SessionLine>>,
}

impl CardView {
    /// Derive the full view for `machine` at `clock`.
    #[must_use]
    pub fn build(machine: &MachineSnapshot, clock: &Clock) -> Self {
        let card_class = format!("{CARD_BASE_CLASS} {}", border_class(machine));
        let indicator_class = format!("{INDICATOR_BASE_CLASS} {}", indicator_status_class(machine));
        let label = status_label(machine);

        let Some(user) = machine.current_user.clone() else {
            return Self {
                card_class,
                indicator_class,
                label,
                user_name: None,
                last_activity: None,
                lead_name: None,
                no_lead_warning: false,
                no_user: true,
                sessions: None,
            };
        };

        let last_activity = machine
            .last_activity
            .as_deref()
            .and_then(|ts| clock.local_hh_mm(ts));
        let lead_name = if machine.has_lead() {
            Some(
                machine
                    .lead_operator_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_owned()),
            )
        } else {
            None
        };
        let no_lead_warning = lead_name.is_none() && !machine.is_offline();
        let sessions: Vec<SessionLine> = machine
            .active_sessions
            .iter()
            .map(|session| SessionLine {
                user_name: session.user_name.clone(),
                is_lead: session.is_lead,
                since: session.start_time.as_deref().and_then(|ts| clock.time_since(ts)),
            })
            .collect();

        Self {
            card_class,
            indicator_class,
            label,
            user_name: Some(user),
            last_activity,
            lead_name,
            no_lead_warning,
            no_user: false,
            sessions: Some(sessions),
        }
    }

    /// Session count badge text; `None` when no session block is shown.
    #[must_use]
    pub fn session_badge(&self) -> Option<String> {
        self.sessions.as_ref().map(|lines| session_count_text(lines.len()))
    }
}

/// `"1 session"` / `"N sessions"`.
#[must_use]
pub fn session_count_text(count: usize) -> String {
    if count == 1 {
        "1 session".to_owned()
    } else {
        format!("{count} sessions")
    }
}

fn has_warning_override(machine: &MachineSnapshot) -> bool {
    matches!(machine.warning_status, WarningStatus::Warning | WarningStatus::Timeout)
}

fn lacks_lead(machine: &MachineSnapshot) -> bool {
    !machine.is_offline() && !machine.has_lead()
}

/// Border class after applying every override.
#[must_use]
pub fn border_class(machine: &MachineSnapshot) -> &'static str {
    let mut border = match machine.status.as_str() {
        "active" => "border-success",
        "warning" => "border-warning",
        "offline" => "border-secondary",
        _ => "border-primary",
    };
    if lacks_lead(machine) {
        border = "border-danger";
    }
    if has_warning_override(machine) {
        border = "border-warning";
    }
    border
}

fn indicator_status_class(machine: &MachineSnapshot) -> String {
    if has_warning_override(machine) {
        "status-warning".to_owned()
    } else {
        format!("status-{}", machine.status)
    }
}

/// Status badge text: warning/timeout, then missing lead, then raw status.
#[must_use]
pub fn status_label(machine: &MachineSnapshot) -> String {
    match machine.warning_status {
        WarningStatus::Warning => return "Warning".to_owned(),
        WarningStatus::Timeout => return "Timeout".to_owned(),
        WarningStatus::Normal => {}
    }
    if lacks_lead(machine) {
        return "No Lead".to_owned();
    }
    capitalize(&machine.status)
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single mutation a renderer applies to an existing card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardChange {
    /// Replace the card's whole class list (base + border).
    CardClass(String),
    /// Replace the indicator's whole class list.
    IndicatorClass(String),
    Label(String),
    /// Ensure (`Some`) or remove (`None`) the user line.
    UserName(Option<String>),
    /// Ensure (`Some`) or remove (`None`) the last-activity line.
    LastActivity(Option<String>),
    /// Ensure (`Some`) or remove (`None`) the LEAD badge and lead line.
    Lead(Option<String>),
    NoLeadWarning(bool),
    NoUser(bool),
    /// Clear and repopulate (`Some`) or remove (`None`) the session list and
    /// its count badge.
    Sessions(Option<Vec<SessionLine>>),
}

/// Changes needed to move a card from `prev` to `next`.
///
/// With no previous view every change is emitted, which resets whatever the
/// server-rendered markup contained.
#[must_use]
pub fn reconcile(prev: Option<&CardView>, next: &CardView) -> Vec<CardChange> {
    let mut changes = Vec::new();
    if prev.map_or(true, |p| p.card_class != next.card_class) {
        changes.push(CardChange::CardClass(next.card_class.clone()));
    }
    if prev.map_or(true, |p| p.indicator_class != next.indicator_class) {
        changes.push(CardChange::IndicatorClass(next.indicator_class.clone()));
    }
    if prev.map_or(true, |p| p.label != next.label) {
        changes.push(CardChange::Label(next.label.clone()));
    }
    if prev.map_or(true, |p| p.user_name != next.user_name) {
        changes.push(CardChange::UserName(next.user_name.clone()));
    }
    if prev.map_or(true, |p| p.last_activity != next.last_activity) {
        changes.push(CardChange::LastActivity(next.last_activity.clone()));
    }
    if prev.map_or(true, |p| p.lead_name != next.lead_name) {
        changes.push(CardChange::Lead(next.lead_name.clone()));
    }
    if prev.map_or(true, |p| p.no_lead_warning != next.no_lead_warning) {
        changes.push(CardChange::NoLeadWarning(next.no_lead_warning));
    }
    if prev.map_or(true, |p| p.no_user != next.no_user) {
        changes.push(CardChange::NoUser(next.no_user));
    }
    if prev.map_or(true, |p| p.sessions != next.sessions) {
        changes.push(CardChange::Sessions(next.sessions.clone()));
    }
    changes
}
