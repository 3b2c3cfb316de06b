//! Wire model for the machine-tracker HTTP API.
//!
//! This crate owns the JSON and text representations consumed by both the
//! browser `client` and the `cli`. It intentionally tolerates the loose typing
//! of the server (numeric or string machine ids, missing optional fields) so
//! one odd record never fails a whole poll cycle.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Error returned by the `decode_*` helpers.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The body was not valid JSON for the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// Areas and zones
// =============================================================================

/// An area the current viewer may access, as returned by `GET /api/areas`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub zone_count: Option<u32>,
    #[serde(default)]
    pub machine_count: Option<u32>,
}

/// A zone reference nested inside an [`AreaNode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRef {
    pub id: i64,
    pub name: String,
}

/// One node of `GET /api/areas/hierarchy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub zones: Vec<ZoneRef>,
}

// =============================================================================
// Machines and sessions
// =============================================================================

/// Inactivity classification computed server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningStatus {
    Warning,
    Timeout,
    #[default]
    #[serde(other)]
    Normal,
}

/// An active operator session on a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_name: String,
    #[serde(default)]
    pub is_lead: bool,
    /// ISO-8601 login time. Older servers call this `login_time`.
    #[serde(default, alias = "login_time")]
    pub start_time: Option<String>,
}

/// The latest status record for one tracked machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Database row id, when the server includes it.
    #[serde(default)]
    pub id: Option<i64>,
    /// Operator-facing machine identifier (e.g. `"07"`); also the DOM card suffix.
    #[serde(deserialize_with = "deserialize_string_from_any")]
    pub machine_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw status string (`active`, `idle`, `warning`, `offline`, ...).
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_warning_status")]
    pub warning_status: WarningStatus,
    #[serde(default)]
    pub current_user: Option<String>,
    /// ISO-8601 timestamp of the last heartbeat/activity.
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default)]
    pub lead_operator_id: Option<i64>,
    #[serde(default)]
    pub lead_operator_name: Option<String>,
    #[serde(default)]
    pub area_id: Option<i64>,
    #[serde(default)]
    pub zone_id: Option<i64>,
    #[serde(default)]
    pub active_sessions: Vec<SessionInfo>,
}

impl MachineSnapshot {
    /// Whether the machine reports the `offline` status.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.status == "offline"
    }

    /// Whether the machine reports the `active` status.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// Whether a lead operator is assigned.
    #[must_use]
    pub fn has_lead(&self) -> bool {
        self.lead_operator_id.is_some()
    }

    /// Display label used by machine pickers, e.g. `"Lathe (#07)"`.
    #[must_use]
    pub fn picker_label(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} (#{})", self.machine_id),
            None => format!("#{}", self.machine_id),
        }
    }
}

fn deserialize_string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_warning_status<'de, D>(deserializer: D) -> Result<WarningStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<WarningStatus>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// =============================================================================
// RFID text endpoints
// =============================================================================

/// Outcome of `GET /api/check_user`, classified from the plain-text body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanVerdict {
    Allow,
    Deny,
    /// Anything else; carries the raw body for display.
    Unknown(String),
}

impl ScanVerdict {
    /// Classify a response body. `ALLOW` is checked before `DENY`.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if body.contains("ALLOW") {
            Self::Allow
        } else if body.contains("DENY") {
            Self::Deny
        } else {
            Self::Unknown(body.trim().to_owned())
        }
    }
}

/// Outcome of `GET /api/logout`, classified from the plain-text body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    Unexpected(String),
}

impl LogoutOutcome {
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        if body.contains("LOGOUT") {
            Self::LoggedOut
        } else {
            Self::Unexpected(body.trim().to_owned())
        }
    }
}

// =============================================================================
// Endpoints
// =============================================================================

/// A `GET` endpoint: a fixed path plus unencoded query pairs.
///
/// Percent-encoding is left to the HTTP client on each side (`gloo-net` in the
/// browser, `reqwest` in the CLI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn bare(path: &'static str) -> Self {
        Self { path, query: Vec::new() }
    }

    #[must_use]
    pub fn areas() -> Self {
        Self::bare("/api/areas")
    }

    #[must_use]
    pub fn area_hierarchy() -> Self {
        Self::bare("/api/areas/hierarchy")
    }

    #[must_use]
    pub fn machine_status() -> Self {
        Self::bare("/api/machines/status")
    }

    #[must_use]
    pub fn check_user(rfid: &str, machine_id: &str) -> Self {
        Self {
            path: "/api/check_user",
            query: vec![("rfid", rfid.to_owned()), ("machine_id", machine_id.to_owned())],
        }
    }

    #[must_use]
    pub fn logout(rfid: &str, machine_id: &str) -> Self {
        Self {
            path: "/api/logout",
            query: vec![("rfid", rfid.to_owned()), ("machine_id", machine_id.to_owned())],
        }
    }

    #[must_use]
    pub fn heartbeat(machine_id: &str) -> Self {
        Self {
            path: "/api/heartbeat",
            query: vec![("machine_id", machine_id.to_owned()), ("activity", "1".to_owned())],
        }
    }

    /// Join `path` onto `base`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn join(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode the body of `GET /api/machines/status`.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body is not a snapshot array.
pub fn decode_machines(body: &str) -> Result<Vec<MachineSnapshot>, WireError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the body of `GET /api/areas`.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body is not an area array.
pub fn decode_areas(body: &str) -> Result<Vec<Area>, WireError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the body of `GET /api/areas/hierarchy`.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body is not an area-node array.
pub fn decode_hierarchy(body: &str) -> Result<Vec<AreaNode>, WireError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
