//! RFID scan simulator state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The simulator stands in for a physical reader: it tracks the selected
//! machine and the scanned tag, builds scan/logout/heartbeat requests, and
//! owns the repeating heartbeat timer. Hosts (browser widget, CLI) perform
//! the I/O and feed outcomes back through the `finish_*` methods.
//!
//! States: no machine -> machine selected -> user logged in, plus an
//! orthogonal "activity running" flag backed by the timer handle.
//!
//! The timer is generic so each host supplies its own scheduler; the state
//! machine only guarantees that at most one handle is alive at a time.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use std::time::Duration;

use wire::{Endpoint, LogoutOutcome, ScanVerdict};

/// Period between simulated activity heartbeats.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(15);

/// A cancellable repeating timer owned by the simulator.
pub trait TimerHandle {
    /// Stop the timer; no further ticks may fire afterwards.
    fn cancel(self);
}

/// Status line colour, rendered as `text-{tone}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "text-info",
            Self::Success => "text-success",
            Self::Warning => "text-warning",
            Self::Danger => "text-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub tone: Tone,
}

impl StatusLine {
    fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPhase {
    NoMachine,
    MachineSelected,
    UserLoggedIn,
}

/// Which action buttons are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStates {
    pub logout: bool,
    pub start_activity: bool,
    pub stop_activity: bool,
}

/// Button enablement from (machine selected, tag recorded, activity running).
#[must_use]
pub fn button_states(machine_selected: bool, tag_recorded: bool, activity_running: bool) -> ButtonStates {
    let ready = machine_selected && tag_recorded;
    ButtonStates {
        logout: ready,
        start_activity: ready && !activity_running,
        stop_activity: activity_running,
    }
}

/// Reasons an action cannot be issued from the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("Please select a machine first")]
    NoMachine,
    #[error("Please select a machine and enter an RFID tag ID")]
    MissingTag,
    #[error("No active user to log out")]
    NoUser,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    pub machine_id: String,
    pub rfid: String,
}

impl ScanRequest {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::check_user(&self.rfid, &self.machine_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutRequest {
    pub machine_id: String,
    pub rfid: String,
}

impl LogoutRequest {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::logout(&self.rfid, &self.machine_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeartbeatRequest {
    pub machine_id: String,
}

impl HeartbeatRequest {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::heartbeat(&self.machine_id)
    }
}

/// Simulator state owned by one widget or CLI session.
#[derive(Debug)]
pub struct RfidSimulator<H> {
    machine: Option<String>,
    rfid: Option<String>,
    timer: Option<H>,
    heartbeat_interval: Duration,
    last_action: String,
    status: StatusLine,
}

impl<H> Default for RfidSimulator<H> {
    fn default() -> Self {
        Self {
            machine: None,
            rfid: None,
            timer: None,
            heartbeat_interval: HEARTBEAT_INTERVAL,
            last_action: "None".to_owned(),
            status: StatusLine::new("Ready", Tone::Info),
        }
    }
}

impl<H: TimerHandle> RfidSimulator<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the heartbeat period passed to the scheduler.
    #[must_use]
    pub fn with_heartbeat_interval(mut self, every: Duration) -> Self {
        self.heartbeat_interval = every;
        self
    }

    #[must_use]
    pub fn phase(&self) -> SimPhase {
        match (&self.machine, &self.rfid) {
            (None, _) => SimPhase::NoMachine,
            (Some(_), None) => SimPhase::MachineSelected,
            (Some(_), Some(_)) => SimPhase::UserLoggedIn,
        }
    }

    #[must_use]
    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }

    #[must_use]
    pub fn rfid(&self) -> Option<&str> {
        self.rfid.as_deref()
    }

    #[must_use]
    pub fn is_activity_running(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    #[must_use]
    pub fn buttons(&self) -> ButtonStates {
        button_states(self.machine.is_some(), self.rfid.is_some(), self.is_activity_running())
    }

    fn set_status(&mut self, message: impl Into<String>, tone: Tone) {
        self.status = StatusLine::new(message, tone);
    }

    /// Select a machine by id; a blank id deselects.
    ///
    /// Clears any recorded tag and stops a running activity simulation.
    pub fn select_machine(&mut self, machine_id: &str) {
        let machine_id = machine_id.trim();
        let next = (!machine_id.is_empty()).then(|| machine_id.to_owned());
        if next == self.machine {
            return;
        }
        self.stop_activity();
        self.machine = next;
        self.rfid = None;
    }

    /// Validate and build a scan for `rfid` on the selected machine.
    ///
    /// # Errors
    ///
    /// [`SimError::MissingTag`] for a blank tag, [`SimError::NoMachine`]
    /// without a selected machine. The status line reflects the error.
    pub fn begin_scan(&mut self, rfid: &str) -> Result<ScanRequest, SimError> {
        let rfid = rfid.trim();
        let Some(machine_id) = self.machine.clone() else {
            let err = if rfid.is_empty() { SimError::MissingTag } else { SimError::NoMachine };
            self.set_status(err.to_string(), Tone::Warning);
            return Err(err);
        };
        if rfid.is_empty() {
            self.set_status(SimError::MissingTag.to_string(), Tone::Warning);
            return Err(SimError::MissingTag);
        }
        self.set_status("Sending RFID scan...", Tone::Info);
        Ok(ScanRequest {
            machine_id,
            rfid: rfid.to_owned(),
        })
    }

    /// Apply the server's verdict; returns `false` when the machine changed
    /// while the request was in flight and the verdict was ignored.
    pub fn finish_scan(&mut self, request: &ScanRequest, verdict: ScanVerdict) -> bool {
        if self.machine.as_deref() != Some(request.machine_id.as_str()) {
            return false;
        }
        match verdict {
            ScanVerdict::Allow => {
                self.rfid = Some(request.rfid.clone());
                self.last_action = "RFID scan - Access granted".to_owned();
                self.set_status("Access granted", Tone::Success);
            }
            ScanVerdict::Deny => {
                self.last_action = "RFID scan - Access denied".to_owned();
                self.set_status("Access denied", Tone::Danger);
            }
            ScanVerdict::Unknown(text) => {
                self.last_action = "RFID scan - Unknown response".to_owned();
                self.set_status(format!("Unknown response: {text}"), Tone::Warning);
            }
        }
        true
    }

    /// Record a transport or HTTP failure of a scan.
    pub fn scan_failed(&mut self, error: &str) {
        self.last_action = "RFID scan - Error".to_owned();
        self.set_status(format!("Error: {error}"), Tone::Danger);
    }

    /// Build a logout for the recorded tag.
    ///
    /// # Errors
    ///
    /// [`SimError::NoUser`] when no machine or tag is recorded.
    pub fn begin_logout(&mut self) -> Result<LogoutRequest, SimError> {
        let (Some(machine_id), Some(rfid)) = (self.machine.clone(), self.rfid.clone()) else {
            self.set_status(SimError::NoUser.to_string(), Tone::Warning);
            return Err(SimError::NoUser);
        };
        self.set_status("Logging out user...", Tone::Info);
        Ok(LogoutRequest { machine_id, rfid })
    }

    /// Apply a logout response. A confirmed logout clears the tag and stops
    /// the activity simulation in the same transition.
    pub fn finish_logout(&mut self, request: &LogoutRequest, outcome: LogoutOutcome) -> bool {
        if self.machine.as_deref() != Some(request.machine_id.as_str())
            || self.rfid.as_deref() != Some(request.rfid.as_str())
        {
            return false;
        }
        match outcome {
            LogoutOutcome::LoggedOut => {
                self.stop_activity();
                self.rfid = None;
                self.last_action = "User logout".to_owned();
                self.set_status("User logged out successfully", Tone::Success);
            }
            LogoutOutcome::Unexpected(text) => {
                self.last_action = "Logout attempt - Unexpected response".to_owned();
                self.set_status(format!("Unexpected response: {text}"), Tone::Warning);
            }
        }
        true
    }

    /// Record a transport or HTTP failure of a logout.
    pub fn logout_failed(&mut self, error: &str) {
        self.last_action = "Logout attempt - Error".to_owned();
        self.set_status(format!("Error: {error}"), Tone::Danger);
    }

    /// Start heartbeats: stop any running timer, schedule a new one through
    /// `schedule` at the heartbeat interval, and return the heartbeat to send
    /// immediately.
    ///
    /// # Errors
    ///
    /// [`SimError::NoMachine`] without a selected machine; nothing is scheduled.
    pub fn start_activity<F>(&mut self, schedule: F) -> Result<HeartbeatRequest, SimError>
    where
        F: FnOnce(Duration) -> H,
    {
        let Some(machine_id) = self.machine.clone() else {
            self.set_status(SimError::NoMachine.to_string(), Tone::Warning);
            return Err(SimError::NoMachine);
        };
        self.stop_activity();
        self.timer = Some(schedule(self.heartbeat_interval));
        self.last_action = "Started activity simulation".to_owned();
        self.set_status("Activity simulation started", Tone::Success);
        Ok(HeartbeatRequest { machine_id })
    }

    /// Cancel the heartbeat timer. Returns `false` when nothing was running.
    pub fn stop_activity(&mut self) -> bool {
        let Some(timer) = self.timer.take() else {
            return false;
        };
        timer.cancel();
        self.last_action = "Stopped activity simulation".to_owned();
        self.set_status("Activity simulation stopped", Tone::Info);
        true
    }

    /// Heartbeat for the current tick, or `None` when activity is not running.
    #[must_use]
    pub fn heartbeat(&self) -> Option<HeartbeatRequest> {
        if self.timer.is_none() {
            return None;
        }
        self.machine.clone().map(|machine_id| HeartbeatRequest { machine_id })
    }

    /// Record a failed heartbeat. The timer keeps running.
    pub fn heartbeat_failed(&mut self, error: &str) {
        self.set_status(format!("Error sending activity heartbeat: {error}"), Tone::Warning);
    }
}
